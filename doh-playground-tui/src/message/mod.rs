//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键翻译为消息，Update 层消费消息并修改 Model。
//! 异步查询完成后，Backend 也以消息（`AppMessage::QueryFinished`）的形式回到主循环。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 应用主消息
//!         mod form;           // 表单消息
//!         mod results;        // 结果表格消息
//!

mod app;
mod form;
mod results;

pub use app::AppMessage;
pub use form::FormMessage;
pub use results::ResultsMessage;
