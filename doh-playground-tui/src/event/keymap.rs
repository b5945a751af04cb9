//! 快捷键配置
//!
//! 域名输入框会吞掉普通字符，所以全局操作都绑定在 Alt / Ctrl / 功能键上。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_F1: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const ESCAPE: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 焦点切换
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // 查询
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const RESET: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const COPY_ZONE: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 历史
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // 输入
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    /// 帮助页中展示的快捷键列表
    pub const HELP_ENTRIES: &'static [(&'static str, &'static str)] = &[
        ("Enter", "Run query"),
        ("Tab / Shift+Tab", "Move focus"),
        ("← / →", "Change resolver, move type cursor"),
        ("Space", "Toggle record type"),
        ("Ctrl+U", "Clear domain input"),
        ("↑ / ↓, j / k", "Scroll results"),
        ("Alt+← / Alt+→", "Previous / next query"),
        ("Alt+R", "Reset form and results"),
        ("Alt+C", "Copy results as zone file"),
        ("Alt+T", "Toggle theme"),
        ("F1 / Alt+H / ?", "Show this help"),
        ("Esc", "Close help, clear status"),
        ("Alt+Q / Ctrl+C", "Quit"),
    ];
}
