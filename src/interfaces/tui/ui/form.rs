//! 提交表单区域
//!
//! 主界面上半部分：长链接输入框、可选的别名输入框和一行提示。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::ui::widgets::InputField;

/// Height of the form pane for the main layout
///
/// 3 rows per field, one extra row when a validation error is shown,
/// plus the hint line.
pub fn form_height(app: &App) -> u16 {
    let mut height = if app.flow.error_message().is_some() {
        4
    } else {
        3
    };
    if app.form.alias_visible {
        height += 3;
    }
    height + 1
}

pub fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let url_field = InputField::new("Long URL", &app.form.url)
        .required()
        .placeholder("Paste a link to shorten")
        .active(app.focus == Focus::UrlField)
        .error(app.flow.error_message());

    let mut constraints = vec![Constraint::Length(url_field.height())];
    if app.form.alias_visible {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    url_field.render(frame, chunks[0]);

    let mut next = 1;
    if app.form.alias_visible {
        let alias_field = InputField::new("Custom Alias", &app.form.alias)
            .placeholder("letters, digits, - and _, at least 3 chars")
            .active(app.focus == Focus::AliasField);
        alias_field.render(frame, chunks[next]);
        next += 1;
    }

    let hint = if app.flow.is_submitting() {
        Line::from(Span::styled(
            "Shortening...",
            Style::default().fg(Color::Yellow).bold(),
        ))
    } else if app.service.supports_alias() && !app.form.alias_visible {
        Line::from(Span::styled(
            "Ctrl+O adds a custom alias",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "Enter shortens the URL",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(hint), chunks[next]);
}
