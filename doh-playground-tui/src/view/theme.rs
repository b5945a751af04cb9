//! 配色与样式
//!
//! 当前主题保存在一个原子变量里，渲染时通过 `colors()` 读取，
//! 不必把主题一路传进每个组件。

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};

use crate::model::Theme;

static ACTIVE: AtomicU8 = AtomicU8::new(0);

/// 切换全局主题
pub fn set_theme(theme: Theme) {
    ACTIVE.store(theme.index(), Ordering::Relaxed);
}

/// 当前主题的配色
pub fn colors() -> &'static Palette {
    let active = if ACTIVE.load(Ordering::Relaxed) == Theme::Light.index() {
        Theme::Light
    } else {
        Theme::Dark
    };
    palette(active)
}

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

/// 配色方案
#[derive(Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    /// 标题栏、状态栏、输入光标
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 已选中的记录类型、提示横幅
    pub info: Color,
    /// 加载提示
    pub warning: Color,
    pub error: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(22, 24, 29),
    fg: Color::Rgb(205, 214, 224),
    muted: Color::Rgb(110, 118, 129),
    accent: Color::Rgb(242, 128, 56),
    border: Color::Rgb(55, 60, 70),
    border_focused: Color::Rgb(242, 128, 56),
    selected_bg: Color::Rgb(60, 52, 45),
    selected_fg: Color::Rgb(255, 240, 225),
    info: Color::Rgb(110, 190, 150),
    warning: Color::Rgb(230, 190, 90),
    error: Color::Rgb(235, 100, 100),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 247, 244),
    fg: Color::Rgb(40, 44, 52),
    muted: Color::Rgb(130, 135, 145),
    accent: Color::Rgb(200, 90, 20),
    border: Color::Rgb(210, 206, 198),
    border_focused: Color::Rgb(200, 90, 20),
    selected_bg: Color::Rgb(252, 226, 205),
    selected_fg: Color::Rgb(40, 30, 20),
    info: Color::Rgb(30, 130, 80),
    warning: Color::Rgb(170, 120, 0),
    error: Color::Rgb(200, 45, 55),
};

/// 常用样式（跟随当前主题）
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 标题栏 / 状态栏
    pub fn bar() -> Style {
        Style::default().bg(colors().accent).fg(Color::Black)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(50, 35, 25))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_eq!(palette(Theme::Light).bg, LIGHT.bg);
        assert_eq!(palette(Theme::Dark).bg, DARK.bg);
        assert_ne!(palette(Theme::Light).fg, palette(Theme::Dark).fg);
    }
}
