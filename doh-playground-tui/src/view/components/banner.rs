//! 提示 / 错误横幅

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 横幅高度：没有内容时为 0
pub fn height(app: &App) -> u16 {
    if app.results.status.info().is_some() || app.results.status.error().is_some() {
        3
    } else {
        0
    }
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let (title, message, color) = if let Some(error) = app.results.status.error() {
        ("Error querying resolver", error, c.error)
    } else if let Some(info) = app.results.status.info() {
        ("Info", info, c.info)
    } else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Line::styled(message, Style::default().fg(c.fg)))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
