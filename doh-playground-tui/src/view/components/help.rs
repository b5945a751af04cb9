//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::view::theme::colors;

/// 键名列宽
const KEY_WIDTH: usize = 18;

pub fn render(frame: &mut Frame) {
    let c = colors();
    let entries = DefaultKeymap::HELP_ENTRIES;
    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(c.bg));

    let mut lines = vec![
        Line::styled(
            "Key bindings",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(entries.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<KEY_WIDTH$}"), Style::default().fg(c.accent)),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算居中区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
