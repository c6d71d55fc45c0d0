use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;

fn header_cell(name: &str) -> Span<'static> {
    Span::styled(
        name.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_link_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let total = app.session.len();

    if total == 0 {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No links yet",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Type a URL above and press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to shorten it", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Shortened Links")
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    // 计算可见窗口（border 2行 + header 1行 + header margin 1行 = 4行开销）
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);

    // 确保 scroll_offset 合法
    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    let header = Row::new(vec![
        Span::raw("  "), // Copied marker column
        header_cell("Short URL"),
        header_cell("Original URL"),
        header_cell("Created"),
        header_cell("Clicks"),
    ])
    .bottom_margin(1);

    // 虚拟渲染：只构建可见行的 Row
    let visible_links = &app.session.links()[offset..end];
    let mut rows = Vec::with_capacity(end - offset);
    for link in visible_links {
        // Truncate original URL if too long (char-wise, URLs may contain IDNs)
        let display_url = if link.original_url.chars().count() > URL_TRUNCATE_LENGTH {
            let truncated: String = link.original_url.chars().take(URL_TRUNCATE_LENGTH).collect();
            format!("{}...", truncated)
        } else {
            link.original_url.clone()
        };

        // Per-record copied marker, cleared again after a short delay
        let copied_prefix = if app.copied.is_marked(link.id) {
            Span::styled(
                "✓ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        };

        let clicks_text = match link.clicks {
            Some(clicks) => format!("{}", clicks),
            None => "-".to_string(),
        };

        let row = Row::new(vec![
            copied_prefix,
            Span::styled(
                link.short_url.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_url, Style::default().fg(Color::Blue)),
            Span::styled(link.created_display(), Style::default().fg(Color::DarkGray)),
            Span::styled(clicks_text, Style::default().fg(Color::Green)),
        ]);

        rows.push(row);
    }

    let border_style = if app.focus == Focus::LinkList {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(2),  // Copied marker
            ratatui::layout::Constraint::Length(30), // Short URL
            ratatui::layout::Constraint::Min(20),    // Original URL
            ratatui::layout::Constraint::Length(21), // Created
            ratatui::layout::Constraint::Length(8),  // Clicks
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("Shortened Links ({})", total))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .column_spacing(1);

    // 列表未获得焦点时不渲染选中高亮
    if app.focus == Focus::LinkList {
        table = table
            .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .highlight_symbol("▶ ");
    }

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
