use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

fn section(name: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        name,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(key: &'static str, desc: &'static str, key_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16} ", key), Style::default().fg(key_color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let mut help_text = vec![
        Line::from(""),
        section("FORM"),
        entry("Enter", "Shorten the URL", Color::Green),
        entry("Tab", "Switch focus", Color::Cyan),
    ];
    if app.service.supports_alias() {
        help_text.push(entry("Ctrl+O", "Toggle custom alias field", Color::Yellow));
    }
    help_text.push(entry("Esc", "Clear form (quit when empty)", Color::Red));
    help_text.push(entry("Down", "Jump to the link list", Color::Cyan));

    help_text.push(Line::from(""));
    help_text.push(section("NAVIGATION"));
    help_text.push(entry("Up/Down, j/k", "Navigate list", Color::Cyan));
    help_text.push(entry("Home, g", "Jump to top", Color::Cyan));
    help_text.push(entry("End, G", "Jump to bottom", Color::Cyan));
    help_text.push(entry("Tab, i, Esc", "Back to the form", Color::Cyan));

    help_text.push(Line::from(""));
    help_text.push(section("ACTIONS"));
    help_text.push(entry("c, y", "Copy short URL to clipboard", Color::Green));
    if !app.service.is_demo() {
        help_text.push(entry("Enter, o", "Open short URL in browser", Color::Blue));
    }
    help_text.push(entry("d", "Delete selected link (no undo)", Color::Red));
    help_text.push(entry("x", "Clear the whole list", Color::Red));

    help_text.push(Line::from(""));
    help_text.push(section("MARKERS"));
    help_text.push(entry("✓ (green)", "Copied a moment ago", Color::Green));

    help_text.push(Line::from(""));
    help_text.push(section("UTILITY"));
    help_text.push(entry("?, h", "Show this help", Color::Cyan));
    help_text.push(entry("q", "Quit application", Color::Magenta));

    if app.service.is_demo() {
        help_text.push(Line::from(""));
        help_text.push(Line::from(vec![Span::styled(
            "Local backend: short links are simulated and cannot be opened",
            Style::default().fg(Color::Yellow),
        )]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![Span::styled(
        "Press q or Esc to close",
        Style::default().fg(Color::DarkGray),
    )]));

    let help_para = Paragraph::new(help_text).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
