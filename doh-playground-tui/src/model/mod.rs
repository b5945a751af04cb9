//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点（解析器 / 域名 / 类型 / 结果）
//!         mod form;           // 查询表单
//!         mod history;        // 查询字符串历史
//!         mod query;          // 查询状态机与结果
//!         mod theme;          // 主题
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、表单与历史
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表单的值与查询字符串一一对应：
//!
//!         FormState::to_params()  ──▶  QueryParams::to_query_string()
//!                                              │
//!                                              ▼
//!                                        History::push()
//!
//!     后退 / 前进时，取出历史中的查询字符串，重新加载到表单：
//!
//!         History::back()  ──▶  QueryParams::parse()  ──▶  FormState::load()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、查询状态（QueryStatus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Idle → Loading → Success / Empty / Failed
//!
//!     Loading 期间结果表格为空，状态栏显示加载提示；
//!     结束后只会有记录、提示、错误三者之一。
//!

mod app;
mod focus;
mod form;
mod history;
mod query;
mod theme;

pub use app::App;
pub use focus::Focus;
pub use form::FormState;
pub use history::History;
pub use query::{QueryStatus, ResultsState};
pub use theme::Theme;
