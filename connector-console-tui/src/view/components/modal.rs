//! 弹窗组件

use connector_console_core::{row_actions, ConfirmationGate, RowActionItem};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{action_label, t};
use crate::model::{App, Modal};
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::RowActions {
            connector_id,
            cursor,
        } => render_row_actions(app, frame, connector_id, *cursor),
        Modal::ConfirmDelete {
            connector_name,
            gate,
            focus,
            ..
        } => render_confirm_delete(frame, connector_name, gate, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区（去掉边框与左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染行操作菜单
fn render_row_actions(app: &App, frame: &mut Frame, connector_id: &str, cursor: usize) {
    let Some(snapshot) = app
        .connectors
        .collection
        .controller(connector_id)
        .map(|c| c.snapshot())
    else {
        return;
    };
    let texts = t();
    let c = colors();

    let area = centered_rect(32, 9, frame.area());
    frame.render_widget(Clear, area);

    let name = snapshot.connector.name().unwrap_or(texts.table.unnamed);
    let block = Block::default()
        .title(format!(" {} · {} ", texts.actions.title, truncate_to_width(name, 16)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let lines: Vec<Line> = row_actions(&snapshot)
        .iter()
        .enumerate()
        .map(|(i, item)| menu_line(item, i == cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

fn menu_line(item: &RowActionItem, focused: bool) -> Line<'static> {
    if item.action.is_separator() {
        return Line::styled("─".repeat(22), Style::default().fg(colors().border));
    }

    let label = format!(" {:<20}", action_label(item.action));
    let style = match (item.enabled, focused) {
        (true, true) => Styles::selected(),
        (true, false) => Style::default().fg(colors().fg),
        (false, true) => Styles::disabled().add_modifier(Modifier::REVERSED),
        (false, false) => Styles::disabled(),
    };
    Line::styled(label, style)
}

/// 渲染确认删除弹窗（仅在 gate 处于 confirming 时绘制）
fn render_confirm_delete(
    frame: &mut Frame,
    connector_name: &str,
    gate: &ConfirmationGate,
    focus: usize,
) {
    if !gate.is_confirming() {
        return;
    }
    let texts = t();

    let area = centered_rect(48, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            texts.modal.confirm_delete.message,
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{}\"", truncate_to_width(connector_name, 36)),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("      "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            format!("Esc / Enter: {}", t().common.close),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().modal.help;
    let height = u16::try_from(help.lines.len()).unwrap_or(u16::MAX).saturating_add(4);

    let area = centered_rect(52, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    lines.extend(help.lines.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
