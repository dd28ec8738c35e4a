//! Single-page layout with menu bar and status bar.
//!
//! ```text
//! ┌ File  文脈タイプを選択  Help ──────────────────┐
//! ┌─ 立場依存 ──────────────────────────────────────┐
//! │ # 文脈解釈デモ：C（判断委ね系）                  │
//! │ 文脈タイプを選択： [立場依存]  暗黙ルール  …     │
//! │  (page sections, scrollable)                    │
//! └─────────────────────────────────────────────────┘
//!  [1/3 position_dependent]  ←→:Context  ?:Help  q:Quit
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;
use tui_menu::Menu;

use crate::page::{Page, Section};

use super::app::ViewerApp;
use super::markdown;

/// Key bindings shown in the shortcuts overlay.
const SHORTCUTS: &[(&str, &str)] = &[
    ("\u{2190} \u{2192} / h l", "previous / next context type"),
    ("Tab", "next context type"),
    ("1-9", "select context type by number"),
    ("\u{2191} \u{2193} / j k", "scroll"),
    ("PgUp PgDn / Space", "scroll by page"),
    ("Home / g", "back to top"),
    ("F10 / m", "open menu"),
    ("?", "this help"),
    ("q / Esc", "quit"),
];

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut ViewerApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // menu bar
            Constraint::Min(5),    // page
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_page(f, app, outer[1]);
    draw_status(f, app, outer[2]);

    if app.show_help {
        draw_help(f, outer[1]);
    }

    // Fill the menu bar row with white background before rendering menu items.
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(Color::White)),
        outer[0],
    );

    // Menu bar rendered last — dropdowns overlay the page below.
    let menu_area = Rect {
        x: outer[0].x,
        y: outer[0].y,
        width: outer[0].width,
        height: outer[0].height + outer[1].height,
    };
    let menu_widget = Menu::new()
        .default_style(Style::default().fg(Color::Black).bg(Color::White))
        .highlight(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .dropdown_width(24)
        .dropdown_style(Style::default().fg(Color::Black).bg(Color::White));
    f.render_stateful_widget(menu_widget, menu_area, &mut app.menu_state);
}

/// Convert a page into styled lines. Dividers span `width` columns.
pub fn page_lines(page: &Page, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in page.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        match section {
            Section::Divider => lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(width as usize),
                Style::default().fg(Color::DarkGray),
            ))),
            Section::Caption(text) => lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))),
            Section::Selector {
                prompt,
                options,
                selected,
            } => {
                let mut spans = vec![Span::styled(
                    format!("{prompt}："),
                    Style::default().fg(Color::White),
                )];
                for (i, opt) in options.iter().enumerate() {
                    let span = if i == *selected {
                        Span::styled(
                            format!(" [{}] ", opt.label),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(
                            format!("  {}  ", opt.label),
                            Style::default().fg(Color::DarkGray),
                        )
                    };
                    spans.push(span);
                }
                lines.push(Line::from(spans));
            }
            other => lines.extend(markdown::render_markdown(&other.to_markdown())),
        }
    }
    lines
}

fn draw_page(f: &mut Frame, app: &mut ViewerApp, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current().label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let para = Paragraph::new(page_lines(&app.page, inner_width)).wrap(Wrap { trim: false });

    // Clamp scroll against the rows the wrapped paragraph really occupies.
    // Measured before the block is attached so borders are not counted.
    let total_rows = para.line_count(inner_width);
    let max_scroll = total_rows.saturating_sub(inner_height as usize);
    app.viewport_height = inner_height;
    app.max_scroll = max_scroll.min(u16::MAX as usize) as u16;
    app.scroll = app.scroll.min(app.max_scroll);

    let para = para.block(block).scroll((app.scroll, 0));
    f.render_widget(para, area);

    if app.max_scroll > 0 {
        let mut state = ScrollbarState::new(app.max_scroll as usize).position(app.scroll as usize);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, area, &mut state);
    }
}

fn draw_status(f: &mut Frame, app: &ViewerApp, area: Rect) {
    let ctx = app.current();
    let spans = vec![
        Span::styled(" [", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", app.selected + 1, app.catalog().len()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(ctx.label, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" ({})", ctx.key),
            Style::default().fg(Color::Green),
        ),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            "\u{2190}\u{2192}:Context  \u{2191}\u{2193}:Scroll  F10:Menu  ?:Help  q:Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = 56u16.min(area.width);
    let height = (SHORTCUTS.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let lines: Vec<Line> = SHORTCUTS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {keys:<20}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
