use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

/// Loading syntect's syntax and theme dumps is slow, so one instance is shared.
pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    theme: Theme,
}

impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let mut themeset = ThemeSet::load_defaults();
        let theme = themeset.themes.remove(THEME).unwrap_or_default();

        PulldownHighlighter { syntaxset, theme }
    }

    fn syntax_for(&self, kind: &CodeBlockKind<'_>) -> &SyntaxReference {
        let token = match kind {
            CodeBlockKind::Fenced(info) => info.split([' ', ',']).next().unwrap_or_default(),
            CodeBlockKind::Indented => "",
        };
        self.syntaxset
            .find_syntax_by_token(token)
            .unwrap_or_else(|| self.syntaxset.find_syntax_plain_text())
    }

    /// Replaces every code block in `events` with a pre-rendered HTML block.
    ///
    /// A block syntect fails on is passed through untouched so pulldown-cmark
    /// renders it as an escaped `<pre><code>`.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut block: Option<CodeBlockKind<'a>> = None;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    to_highlight.clear();
                    block = Some(kind);
                }
                Event::End(TagEnd::CodeBlock) => {
                    let Some(kind) = block.take() else {
                        out_events.push(Event::End(TagEnd::CodeBlock));
                        continue;
                    };
                    let syntax = self.syntax_for(&kind);
                    match highlighted_html_for_string(
                        &to_highlight,
                        &self.syntaxset,
                        syntax,
                        &self.theme,
                    ) {
                        Ok(html) => out_events.push(Event::Html(CowStr::from(html))),
                        Err(e) => {
                            tracing::warn!(error = %e, "code block highlighting failed");
                            out_events.push(Event::Start(Tag::CodeBlock(kind)));
                            out_events.push(Event::Text(CowStr::from(to_highlight.clone())));
                            out_events.push(Event::End(TagEnd::CodeBlock));
                        }
                    }
                    to_highlight.clear();
                }
                Event::Text(t) if block.is_some() => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        out_events
    }
}

impl Default for PulldownHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply syntax highlighting to a pulldown-cmark event stream.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events).into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html, Parser};

    fn render(markdown: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, highlight(Parser::new(markdown)));
        out
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let out = render("```rust\nfn main() {}\n```\n");
        assert!(out.starts_with("<pre style="));
        assert!(!out.contains("<code"));
        assert!(out.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let out = render("```no-such-language\n<b>raw</b>\n```\n");
        assert!(out.starts_with("<pre style="));
        assert!(out.contains("&lt;b&gt;raw&lt;/b&gt;"));
    }

    #[test]
    fn test_text_outside_code_untouched() {
        let out = render("plain *text*\n");
        assert_eq!(out, "<p>plain <em>text</em></p>\n");
    }
}
