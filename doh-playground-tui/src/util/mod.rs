//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     terminal.rs     终端的初始化和恢复（Raw Mode + 备用屏幕）
//!     logging.rs      日志写入文件
//!
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!           否则终端会保持在原始模式，用户输入不会正常显示。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
