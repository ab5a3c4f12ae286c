//! Markdown Rendering for Card Descriptions
//!
//! pulldown-cmark with strikethrough/tables/tasklists enabled and
//! fenced code blocks highlighted through syntect.

use pulldown_cmark::{Parser, Options, Event, CowStr, Tag, TagEnd, CodeBlockKind, html::push_html};
use std::sync::OnceLock;
use syntect::parsing::SyntaxSet;
use syntect::highlighting::{ThemeSet, Theme};
use syntect::html::highlighted_html_for_string;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> &'static Theme {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub").unwrap()
}

/// Render a card description to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render for inline use (strips outer <p> tags), used for card previews
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Replace code block events with pre-highlighted HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) => Some(l.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref mut lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let theme = get_theme();

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme)
        .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = parse_markdown("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn inline_strips_paragraph_wrapper() {
        let html = parse_markdown_inline("plain text");
        assert_eq!(html, "plain text");
    }

    #[test]
    fn inline_keeps_multi_paragraph_html() {
        let html = parse_markdown_inline("one\n\ntwo");
        assert!(html.contains("<p>one</p>"));
        assert!(html.contains("<p>two</p>"));
    }

    #[test]
    fn tasklists_render_checkboxes() {
        let html = parse_markdown("- [x] done\n- [ ] open");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn code_block_is_highlighted() {
        let html = parse_markdown("```rust\nfn main() {}\n```");
        // syntect emits inline-styled <pre> output
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }
}
