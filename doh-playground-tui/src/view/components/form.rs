//! 查询表单组件

use doh_playground_core::{RecordType, RESOLVERS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// 表单高度（不含类型区域）
const FIELD_HEIGHT: u16 = 3;

/// 计算表单所需高度
pub fn height(width: u16) -> u16 {
    FIELD_HEIGHT + types_height(width)
}

/// 渲染表单：左侧解析器 + 域名，下方记录类型
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Min(3)])
        .split(area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(rows[0]);

    render_resolver(app, frame, fields[0]);
    render_domain(app, frame, fields[1]);
    render_types(app, frame, rows[1]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

fn render_resolver(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == Focus::Resolver;
    let name = app.form.resolver().name;

    let line = if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(c.muted)),
            Span::styled(name, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Style::default().fg(c.muted)),
        ])
    } else {
        Line::styled(name, Style::default().fg(c.fg))
    };

    let title = format!("Resolver ({}/{})", app.form.resolver_index + 1, RESOLVERS.len());
    frame.render_widget(Paragraph::new(line).block(field_block(&title, focused)), area);
}

fn render_domain(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == Focus::Domain;

    let line = if app.form.domain.is_empty() && !focused {
        Line::styled("example.com, example.org", Style::default().fg(c.muted))
    } else {
        let mut spans = vec![Span::styled(app.form.domain.as_str(), Style::default().fg(c.fg))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(c.accent)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(field_block("Domain", focused)), area);
}

fn render_types(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == Focus::Types;

    let mut spans = Vec::new();
    for (i, record_type) in RecordType::ALL.iter().enumerate() {
        let selected = app.form.is_selected(*record_type);
        let under_cursor = focused && i == app.form.type_cursor;

        let mut style = if selected {
            Style::default().fg(c.info).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        if under_cursor {
            style = Styles::selected();
        }

        spans.push(Span::styled(chip(*record_type, selected), style));
        spans.push(Span::raw(" "));
    }

    let title = format!("Types ({} selected)", app.form.types.len());
    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(field_block(&title, focused));
    frame.render_widget(paragraph, area);
}

fn chip(record_type: RecordType, selected: bool) -> String {
    let mark = if selected { '■' } else { '□' };
    format!("{mark} {record_type}")
}

/// 类型区域高度：按宽度估算换行后的行数，加上边框
fn types_height(width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let mut lines = 1;
    let mut used = 0;
    for record_type in RecordType::ALL {
        let len = chip(*record_type, false).chars().count() + 1;
        if used + len > inner && used > 0 {
            lines += 1;
            used = 0;
        }
        used += len;
    }
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_height_shrinks_with_width() {
        assert!(types_height(40) > types_height(200));
        assert!(types_height(10_000) >= 3);
    }
}
