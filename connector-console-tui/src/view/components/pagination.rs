//! 分页栏

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染分页栏：页码 / 总页数 / 总条数
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let window = app.connectors.collection.window();

    let arrow = Style::default().fg(c.highlight);
    let mut spans = vec![
        Span::styled(if window.has_previous() { " ◀ " } else { "   " }, arrow),
        Span::styled(
            format!(
                "{} {} {} {}",
                texts.pagination.page,
                window.page,
                texts.pagination.of,
                window.total_pages().max(1)
            ),
            Style::default().fg(c.fg),
        ),
        Span::styled(if window.has_next() { " ▶ " } else { "   " }, arrow),
        Span::styled(
            format!("· {} {}", window.total_count, texts.pagination.items),
            Style::default().fg(c.muted),
        ),
    ];

    if let Some(page) = app.connectors.loading {
        spans.push(Span::styled(
            format!("  {} {page}...", texts.status_bar.loading_page),
            Style::default().fg(c.warning),
        ));
    } else if let Some(ref error) = app.connectors.error {
        spans.push(Span::styled(format!("  {error}"), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
