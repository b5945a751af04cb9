//!
//! src/backend/mod.rs
//! Backend 层：副作用执行
//!
//! Update 层只返回 `Command`，真正的 I/O 在这里完成：
//!
//!     Command::RunQuery        ──▶ QueryService（tokio 任务 + channel）
//!     Command::CopyToClipboard ──▶ Clipboard（OSC 52）
//!     Command::SaveConfig      ──▶ ConfigService（JSON 文件）
//!

mod clipboard;
mod config_service;
mod query_service;

pub use clipboard::{Clipboard, Osc52Clipboard};
pub use config_service::{default_config_file, AppConfig, ConfigService, LocalConfigService};
pub use query_service::QueryService;

use crate::message::AppMessage;
use crate::update::Command;

/// 后端服务集合
pub struct Backend {
    queries: QueryService,
    clipboard: Box<dyn Clipboard>,
    config: Box<dyn ConfigService>,
}

impl Backend {
    pub fn new(
        queries: QueryService,
        clipboard: Box<dyn Clipboard>,
        config: Box<dyn ConfigService>,
    ) -> Self {
        Self {
            queries,
            clipboard,
            config,
        }
    }

    /// 执行命令；失败时返回一条状态消息
    pub fn execute(&mut self, command: Command) -> Option<AppMessage> {
        match command {
            Command::RunQuery(params) => {
                log::info!("Query: {}", params.to_query_string());
                self.queries.spawn(params);
                None
            }
            Command::CopyToClipboard(text) => match self.clipboard.copy(&text) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("Clipboard write failed: {e:#}");
                    Some(AppMessage::SetStatus(format!("Copy failed: {e}")))
                }
            },
            Command::SaveConfig(config) => match self.config.save(&config) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("Failed to save config: {e:#}");
                    Some(AppMessage::SetStatus(format!("Failed to save config: {e}")))
                }
            },
        }
    }

    /// 已完成的查询，转换为消息
    pub fn poll_outcomes(&mut self) -> Vec<AppMessage> {
        self.queries
            .drain()
            .into_iter()
            .map(AppMessage::QueryFinished)
            .collect()
    }
}
