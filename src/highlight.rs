use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Theme> = LazyLock::new(|| {
    ThemeSet::load_defaults()
        .themes
        .remove("base16-ocean.dark")
        .expect("default theme set should include base16-ocean.dark")
});

/// Replace fenced code blocks in a pulldown-cmark event stream with
/// syntect-highlighted HTML. Unfenced blocks fall back to plain text
/// highlighting; everything else passes through untouched.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut out = Vec::new();
    let mut code: Option<(String, &syntect::parsing::SyntaxReference)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let syntax = match &kind {
                    CodeBlockKind::Fenced(lang) => SYNTAXES
                        .find_syntax_by_token(lang)
                        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text()),
                    CodeBlockKind::Indented => SYNTAXES.find_syntax_plain_text(),
                };
                code = Some((String::new(), syntax));
            }
            Event::End(TagEnd::CodeBlock) => {
                let (buf, syntax) = code.take().expect("code block end without start");
                let html = highlighted_html_for_string(&buf, &SYNTAXES, syntax, &THEME)
                    .expect("highlighting embedded post should not fail");
                out.push(Event::Html(CowStr::from(html)));
            }
            Event::Text(t) => match code.as_mut() {
                Some((buf, _)) => buf.push_str(&t),
                None => out.push(Event::Text(t)),
            },
            e => out.push(e),
        }
    }

    out.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    #[test]
    fn test_fenced_block_becomes_highlighted_html() {
        let md = "hello\n\n```rust\nfn main() {}\n```\n";
        let events: Vec<_> = highlight(Parser::new(md)).collect();
        assert!(events.iter().any(|e| matches!(
            e,
            Event::Html(html) if html.contains("<pre") && html.contains("background-color")
        )));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let md = "just a paragraph";
        let events: Vec<_> = highlight(Parser::new(md)).collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Text(t) if &**t == "just a paragraph")));
    }
}
