//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! `update(app, msg)` 是修改 Model 的唯一入口。
//! 需要副作用（发起查询、写剪贴板、保存配置）时，返回一个 `Command`，
//! 由主循环交给 Backend 执行：
//!
//!     AppMessage ──▶ update() ──▶ Option<Command> ──▶ Backend::execute()
//!                                                          │
//!     AppMessage::QueryFinished ◀── Backend::poll_outcomes ┘
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单字段编辑
//!         mod results;        // 结果表格选择
//!

mod form;
mod results;

use doh_playground_core::{format_zone, QueryParams};

use crate::backend::AppConfig;
use crate::message::AppMessage;
use crate::model::{App, FormState};
use crate::view::theme::set_theme;

/// Update 层产生的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 发起查询
    RunQuery(QueryParams),
    /// 写入剪贴板
    CopyToClipboard(String),
    /// 保存配置
    SaveConfig(AppConfig),
}

/// 启动时：查询字符串中带有域名则立即查询
pub fn on_launch(app: &mut App) -> Option<Command> {
    if app.form.domain.trim().is_empty() {
        return None;
    }
    Some(start_query(app))
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::FocusNext => {
            app.focus = app.focus.next();
        }

        AppMessage::FocusPrev => {
            app.focus = app.focus.prev();
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Results(results_msg) => {
            results::update(app, results_msg);
        }

        AppMessage::Submit => {
            let params = app.form.to_params();
            app.history.push(params.to_query_string());
            return Some(start_query(app));
        }

        AppMessage::Reset => {
            app.form = FormState::default();
            app.history.push("");
            app.results.clear();
            app.clear_status();
        }

        AppMessage::HistoryBack => {
            let left = location_domain(app);
            let Some(entry) = app.history.back().map(str::to_string) else {
                app.set_status("No earlier query");
                return None;
            };
            return navigate(app, &left, &entry);
        }

        AppMessage::HistoryForward => {
            let left = location_domain(app);
            let Some(entry) = app.history.forward().map(str::to_string) else {
                app.set_status("No later query");
                return None;
            };
            return navigate(app, &left, &entry);
        }

        AppMessage::CopyZone => {
            let records = app.results.records();
            if records.is_empty() {
                app.set_status("Nothing to copy");
                return None;
            }
            let (text, count) = (format_zone(records), records.len());
            app.set_status(format!("Copied {count} record(s) to clipboard"));
            return Some(Command::CopyToClipboard(text));
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            set_theme(app.theme);
            app.set_status(format!("Theme: {}", app.theme.name()));
            return Some(Command::SaveConfig(AppConfig { theme: app.theme }));
        }

        AppMessage::QueryFinished(outcome) => {
            app.results.finish(outcome);
            app.clear_status();
        }

        AppMessage::SetStatus(message) => {
            app.set_status(message);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    None
}

/// 清空结果并生成查询命令
fn start_query(app: &mut App) -> Command {
    app.results.start();
    app.clear_status();
    Command::RunQuery(app.form.to_params())
}

/// 当前查询字符串中的域名（与表单中未提交的输入无关）
fn location_domain(app: &App) -> String {
    QueryParams::parse(app.location()).domain
}

/// 历史导航：重新加载表单，查询字符串中的域名变化且非空时自动查询
fn navigate(app: &mut App, left_domain: &str, entry: &str) -> Option<Command> {
    let params = QueryParams::parse(entry);
    let domain_changed = params.domain != left_domain;
    app.form.load(&params);
    app.clear_status();

    if domain_changed && !params.domain.trim().is_empty() {
        Some(start_query(app))
    } else {
        None
    }
}
