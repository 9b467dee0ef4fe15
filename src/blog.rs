use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

// Rendered posts and post listings are cached process-wide. The embedded
// sources never change at runtime, so entries are never invalidated.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "posts"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Posts;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse front matter for {0}")]
    FrontMatter(String),
    #[error("Invalid search pattern")]
    Pattern,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn post_source(name: &str) -> Result<String, BlogError> {
    let file = Posts::get(name).ok_or(BlogError::NotFound)?;
    // posts are embedded at compile time, so they are always valid UTF-8
    Ok(String::from_utf8(file.data.into()).expect("embedded post should be UTF-8"))
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_meta(name: &str, source: &str) -> Result<PostMeta, BlogError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| BlogError::FrontMatter(name.to_string()))?;
    Ok(PostMeta {
        name: name.trim_end_matches(".md").to_string(),
        title: fm.data.title,
        description: fm.data.description,
        date: fm.data.date,
        tags: fm.data.tags,
    })
}

/// List post metadata, newest first. A non-empty `pattern` is applied as a
/// case-insensitive regex over the full post source (grep, effectively).
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_meta(pattern: String) -> Result<Vec<PostMeta>, BlogError> {
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(cached) = GLOBAL_META_CACHE.get(&pattern) {
            return Ok(cached.clone());
        }
    }
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|_| BlogError::Pattern)?;

    let mut posts = Posts::iter()
        .map(|name| {
            let source = post_source(&name)?;
            Ok((name, source))
        })
        .filter(|entry| match entry {
            Ok((_, source)) => is_base || re.is_match(source),
            Err(_) => true,
        })
        .map(|entry| entry.and_then(|(name, source)| parse_meta(&name, &source)))
        .collect::<Result<Vec<PostMeta>, BlogError>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    if is_base {
        GLOBAL_META_CACHE.insert(pattern, posts.clone());
    }
    Ok(posts)
}

/// Fetch one post by embedded file name (`<name>.md`) and render its markdown
/// to HTML with highlighted code blocks.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_post(name: String) -> Result<Post, BlogError> {
    if let Some(cached) = GLOBAL_POST_CACHE.get(&name) {
        return Ok(cached.clone());
    }

    let source = post_source(&name)?;
    let meta = parse_meta(&name, &source)?;

    let parser = Parser::new_ext(&source, Options::all());
    let parser = highlight(parser);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    let post = Post {
        meta,
        content: html_output,
    };
    GLOBAL_POST_CACHE.insert(name, post.clone());
    Ok(post)
}

#[cfg(all(test, any(feature = "ssr", feature = "rss")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_meta_is_sorted_newest_first() {
        let posts = get_meta(String::new()).await.expect("posts should parse");
        assert!(posts.len() >= 3);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_get_meta_pattern_filters_posts() {
        let all = get_meta(String::new()).await.expect("posts should parse");
        let filtered = get_meta("hyperliquid".to_string())
            .await
            .expect("filtered posts should parse");
        assert!(!filtered.is_empty());
        assert!(filtered.len() < all.len());
        assert!(filtered.iter().all(|p| p.name.contains("scalping")));
    }

    #[tokio::test]
    async fn test_get_meta_rejects_bad_pattern() {
        let res = get_meta("[unclosed".to_string()).await;
        assert!(matches!(res, Err(BlogError::Pattern)));
    }

    #[tokio::test]
    async fn test_get_post_renders_markdown() {
        let posts = get_meta(String::new()).await.expect("posts should parse");
        let name = format!("{}.md", posts[0].name);
        let post = get_post(name).await.expect("post should render");
        assert!(post.content.contains("<p>"));
        assert!(!post.meta.title.is_empty());
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let res = get_post("no-such-post.md".to_string()).await;
        assert!(matches!(res, Err(BlogError::NotFound)));
    }
}
