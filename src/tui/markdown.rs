//! Markdown rendering for the page pane.
//!
//! Thin wrapper around `tui-markdown` — converts markdown text to
//! styled ratatui `Line`s with owned content, so the page can be kept
//! across frames without borrowing from the section strings.

use ratatui::text::{Line, Span};

/// Parse markdown text and return styled lines suitable for a `Paragraph`.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let rendered = tui_markdown::from_str(text);
    rendered
        .lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), span.style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
