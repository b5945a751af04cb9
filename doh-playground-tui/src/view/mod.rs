//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 主循环每一帧调用 `view::render(&app, frame)` 重新绘制整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主界面布局
//!         mod components;         // 表单、横幅、结果表格、状态栏、帮助
//!         pub mod theme;          // 主题颜色与样式
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
