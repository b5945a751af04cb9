//! 主界面布局
//!
//!     ┌ 标题栏：应用名 + 当前查询字符串 ──────────────────────┐
//!     │ 表单：解析器 │ 域名                                     │
//!     │ 记录类型                                               │
//!     │ 横幅（提示 / 错误，可选）                              │
//!     │ 结果表格                                               │
//!     └ 状态栏 ────────────────────────────────────────────────┘

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 背景
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                 // 标题栏
            Constraint::Length(components::form::height(size.width)), // 表单
            Constraint::Length(components::banner::height(app)),   // 横幅
            Constraint::Min(3),                                    // 结果
            Constraint::Length(1),                                 // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    components::banner::render(app, frame, main_layout[2]);
    components::results::render(app, frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);

    // 帮助弹窗（在最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let location = app.location();
    let nav = match (app.history.can_go_back(), app.history.can_go_forward()) {
        (true, true) => "◀ ▶",
        (true, false) => "◀ ·",
        (false, true) => "· ▶",
        (false, false) => "· ·",
    };

    let line = Line::from(vec![
        Span::raw(concat!(" DoH Playground v", env!("CARGO_PKG_VERSION"), "  ")),
        Span::raw(nav),
        Span::raw("  ?"),
        Span::raw(location),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::bar()), area);
}
