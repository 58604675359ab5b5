//! 连接器表格页面

use connector_console_core::{row_actions, ConnectorSnapshot, RowAction};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{action_label, status_label, t};
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, status_icon, Styles};

const NAME_WIDTH: u16 = 24;
const TYPE_WIDTH: u16 = 22;

/// 渲染连接器表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = app.connectors.collection.rows();
    if rows.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_table(app, &rows, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.connectors.loading.is_some() {
        texts.common.loading
    } else {
        texts.table.empty
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(colors().muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_table(app: &App, rows: &[ConnectorSnapshot], frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let selected = app.connectors.collection.selected();

    let header = Row::new(vec![
        "",
        texts.table.name,
        texts.table.type_,
        texts.table.category,
        texts.table.status,
        texts.table.actions,
    ])
    .style(Styles::title())
    .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|snapshot| {
            let connector = &snapshot.connector;
            let is_selected = selected == Some(connector.id.as_str());
            let marker = if is_selected { "▶" } else { " " };
            let name = connector.name().unwrap_or(texts.table.unnamed);
            let category = connector
                .category()
                .unwrap_or(texts.table.category_missing);

            let status_style = Style::default().fg(c.status(connector.status));
            let status = Line::from(vec![
                Span::styled(status_icon(connector.status), status_style),
                Span::raw(" "),
                Span::styled(status_label(connector.status), status_style),
            ]);

            let name_style = if is_selected {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            Row::new(vec![
                Line::styled(marker, Style::default().fg(c.highlight)),
                Line::styled(truncate_to_width(name, NAME_WIDTH as usize), name_style),
                Line::styled(
                    truncate_to_width(&connector.connector_type_id, TYPE_WIDTH as usize),
                    Style::default().fg(c.muted),
                ),
                Line::styled(category, Style::default().fg(c.muted)),
                status,
                actions_cell(snapshot),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(NAME_WIDTH),
        Constraint::Length(TYPE_WIDTH),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default().with_selected(Some(app.connectors.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 可用的生命周期操作（详情始终可用，不单独列出）
fn actions_cell(snapshot: &ConnectorSnapshot) -> Line<'static> {
    let enabled: Vec<&str> = row_actions(snapshot)
        .iter()
        .filter(|item| item.enabled && item.action != RowAction::Details)
        .map(|item| action_label(item.action))
        .collect();

    if enabled.is_empty() {
        Line::styled("-", Styles::disabled())
    } else {
        Line::styled(enabled.join(" · "), Style::default().fg(colors().fg))
    }
}
