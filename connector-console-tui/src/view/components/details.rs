//! 选中连接器的详情面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{status_label, t};
use crate::model::App;
use crate::view::theme::{colors, status_icon};

/// 渲染详情面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.details.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let Some(snapshot) = app.connectors.collection.selected_snapshot() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::styled(texts.details.nothing_selected, Style::default().fg(c.muted)),
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let connector = &snapshot.connector;
    let caps = snapshot.capabilities;
    let flag = |on: bool| if on { texts.common.yes } else { texts.common.no };
    let created = connector
        .metadata
        .created_at
        .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d %H:%M").to_string());

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(c.muted)),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        field(texts.details.id, connector.id.clone()),
        field(
            texts.table.name,
            connector.name().unwrap_or(texts.table.unnamed).to_string(),
        ),
        field(texts.table.type_, connector.connector_type_id.clone()),
        field(
            texts.table.category,
            connector
                .category()
                .unwrap_or(texts.table.category_missing)
                .to_string(),
        ),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.table.status), Style::default().fg(c.muted)),
            Span::styled(
                format!("{} {}", status_icon(connector.status), status_label(connector.status)),
                Style::default().fg(c.status(connector.status)),
            ),
        ]),
        field(texts.details.created_at, created),
        Line::from(""),
        field(texts.details.can_start, flag(caps.can_start).to_string()),
        field(texts.details.can_stop, flag(caps.can_stop).to_string()),
        field(texts.details.can_delete, flag(caps.can_delete).to_string()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
