//! 结果表格组件

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::{App, Focus, QueryStatus};
use crate::view::theme::{colors, Styles};

/// 渲染结果区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Results;
    let records = app.results.records();

    let title = match &app.results.status {
        QueryStatus::Success(records) => format!(" Results ({}) ", records.len()),
        _ => " Results ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if records.is_empty() {
        render_placeholder(app, frame, area, block);
        return;
    }

    let c = colors();
    let header = Row::new(["Type", "Name", "Data", "TTL"].map(Cell::from))
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows = records.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.record_type.to_string()).style(Style::default().fg(c.accent)),
            Cell::from(record.name.as_str()),
            Cell::from(record.data.as_str()),
            Cell::from(record.ttl.to_string()).style(Style::default().fg(c.muted)),
        ])
        .style(Style::default().fg(c.fg))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Min(20),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(if focused { Styles::selected() } else { Style::default() })
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.results.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

/// 没有记录时：加载中 / 提示 / 空白
fn render_placeholder(app: &App, frame: &mut Frame, area: Rect, block: Block<'_>) {
    let c = colors();
    let line = match &app.results.status {
        QueryStatus::Loading => Line::styled("  Querying resolver…", Style::default().fg(c.warning)),
        QueryStatus::Idle => Line::styled(
            "  Enter a domain and press Enter to query.",
            Style::default().fg(c.muted),
        ),
        // 提示与错误由横幅显示
        _ => Line::from(""),
    };

    frame.render_widget(Paragraph::new(vec![Line::from(""), line]).block(block), area);
}
