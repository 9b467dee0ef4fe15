use leptos::{html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post};
use crate::blog::{Post, PostMeta, GLOBAL_META_CACHE, GLOBAL_POST_CACHE};

use super::scramble::ScrambleText;

#[server(input = GetUrl)]
pub async fn get_meta_server(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta(pattern)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_post_server(name: String) -> Result<Post, ServerFnError> {
    get_post(format!("{name}.md"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Recent-posts teaser on the home page.
#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = OnceResource::new(async {
        get_meta_server(String::new())
            .await
            .unwrap_or_default()
            .into_iter()
            .take(3)
            .collect::<Vec<_>>()
    });

    view! {
        <section class="mb-16 animate-fade-in-up">
            <h2 class="text-2xl font-bold mb-6 text-white">
                <span class="text-accent mr-2">"*"</span>
                "blog"
            </h2>
            <Transition fallback=|| {
                view! { <div class="loading-skeleton h-6 rounded w-2/3"></div> }
            }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    view! {
                        <div class="space-y-4">
                            {posts
                                .into_iter()
                                .map(|post| {
                                    view! {
                                        <div>
                                            <A
                                                href=format!("/blog/{}", post.name)
                                                attr:class="text-white hover:text-accent transition-colors duration-200"
                                            >
                                                {post.title}
                                            </A>
                                            <span class="text-sm text-gray-500 ml-3">
                                                {post.date.format("%b %e, %Y").to_string()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
            <a
                href="/blog"
                class="inline-block mt-6 text-sm text-gray-400 hover:text-accent transition-colors duration-200"
            >
                "all posts →"
            </a>
        </section>
    }
}

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <Title text="blog" />
        <div class="animate-fade-in-up">
            <h1 class="text-4xl font-bold mb-8 text-white">
                <span class="text-accent mr-2">"*"</span>
                <ScrambleText text="blog".to_string() />
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="text-base align-middle ml-4 text-gray-400 hover:text-accent transition-colors duration-200"
                    aria-label="RSS Feed"
                >
                    "rss"
                </a>
            </h1>
            <Outlet />
        </div>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(search, move |search| async move {
        if let Some(cached) = GLOBAL_META_CACHE.get(&search) {
            return cached.clone();
        }
        let meta = get_meta_server(search.clone()).await.unwrap_or_default();
        // only cache every search on the browser
        #[cfg(feature = "hydrate")]
        GLOBAL_META_CACHE.insert(search, meta.clone());
        meta
    });

    view! {
        <form
            class="flex gap-3 items-center mb-8"
            on:submit=move |ev| {
                ev.prevent_default();
                let Some(el) = input_ref.get_untracked() else {
                    return;
                };
                set_search(el.value());
            }
        >
            <label for="blog_search" class="text-sm text-gray-400 whitespace-nowrap">
                "search (regex):"
            </label>
            <input
                id="blog_search"
                class="flex-grow max-w-md px-3 py-1.5 rounded-md border border-gray-700 bg-transparent text-sm focus:outline-none focus:border-accent transition-colors duration-200"
                node_ref=input_ref
                placeholder="pattern..."
            />
        </form>
        <Transition fallback=|| {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-6 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-6 rounded w-2/3"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let posts = posts.await;
                view! {
                    <div class="space-y-10">
                        {posts
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <div class="group">
                                        <A
                                            href=post.name.clone()
                                            attr:class="text-xl text-white font-semibold group-hover:text-accent transition-colors duration-200"
                                        >
                                            {post.title}
                                        </A>
                                        <div class="text-sm text-gray-500 mt-1">
                                            {post.date.format("%b %e, %Y").to_string()}
                                        </div>
                                        <p class="text-gray-400 mt-2 leading-relaxed">
                                            {post.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2 mt-3">
                                            {post
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="text-xs text-gray-400 bg-gray-800 rounded-md px-2 py-1">
                                                            {tag.to_string()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </Transition>
    }
}

#[component]
pub fn BlogPost() -> impl IntoView {
    let params = use_params_map();
    let post_name = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(post_name, move |name| async move {
        let key = format!("{name}.md");
        if let Some(cached) = GLOBAL_POST_CACHE.get(&key) {
            return Ok(cached.clone());
        }
        let res = get_post_server(name).await;
        // only cache fetched posts on the browser
        #[cfg(feature = "hydrate")]
        if let Ok(post) = &res {
            GLOBAL_POST_CACHE.insert(key, post.clone());
        }
        res
    });

    view! {
        <Suspense>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(p) => {
                        view! {
                            <Title text=p.meta.title.clone() />
                            <div class="text-sm text-gray-500 mb-8">
                                {p.meta.date.format("%b %e, %Y").to_string()}
                                <span class="ml-3">
                                    {p
                                        .meta
                                        .tags
                                        .into_iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="text-xs text-gray-400 bg-gray-800 rounded-md px-2 py-1 mr-2">
                                                    {tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </span>
                            </div>
                            <article class="prose prose-invert max-w-none">
                                <div inner_html=p.content></div>
                            </article>
                        }
                            .into_any()
                    }
                    Err(_) => {
                        view! {
                            <p class="text-gray-400">
                                "post not found. "
                                <a href="/blog" class="text-accent hover:underline">
                                    "back to the blog"
                                </a>
                            </p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
