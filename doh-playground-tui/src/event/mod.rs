//!
//! src/event/mod.rs
//! Event 层：输入事件处理
//!
//! 主循环每 100ms 调用一次 `poll_event()`，拿到按键后交给 `handle_event()`
//! 翻译为 `AppMessage`。翻译依据当前焦点：
//!
//!     焦点          普通按键的含义
//!     ─────────────────────────────────────────
//!     Resolver      ← / → 切换解析器
//!     Domain        输入域名
//!     Types         ← / → 移动光标，Space 选中
//!     Results       ↑ / ↓ 滚动结果
//!
//! 全局快捷键见 keymap.rs。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
