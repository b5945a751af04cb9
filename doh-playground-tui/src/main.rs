//! DNS-over-HTTPS Playground TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 查询、剪贴板与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行：初始查询字符串、配置与日志路径
//!     init_logging()          // 日志写入文件
//!     config.load()           // 读取主题
//!     Runtime::new()          // 查询在 tokio 运行时上执行
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     println!("?{query}")    // 退出后打印最后的查询字符串，方便分享
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use doh_playground_core::{QueryPipeline, ReqwestTransport};

use backend::{
    default_config_file, Backend, ConfigService, LocalConfigService, Osc52Clipboard, QueryService,
};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

/// Query public DNS-over-HTTPS resolvers from the terminal
#[derive(Parser, Debug)]
#[command(name = "doh-playground", version, about)]
struct Cli {
    /// Initial query string, e.g. "resolver=Google&domain=example.com&types=MX"
    /// (a leading '?' or a full URL is accepted)
    query: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 日志
    let log_path = init_logging(cli.log_file.as_deref())?;
    tracing::info!("doh-playground v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Logging to {}", log_path.display());

    // 2. 配置（读取失败时使用默认值）
    let config_service =
        LocalConfigService::new(cli.config.clone().unwrap_or_else(default_config_file));
    let config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    tracing::debug!("Config file: {}", config_service.path().display());
    view::theme::set_theme(config.theme);

    // 3. 运行时与后端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let transport = ReqwestTransport::new()?;
    let queries = QueryService::new(
        runtime.handle().clone(),
        QueryPipeline::new(Arc::new(transport)),
    );
    let mut backend = Backend::new(
        queries,
        Box::new(Osc52Clipboard::stdout()),
        Box::new(config_service),
    );

    // 4. 应用实例
    let mut app = model::App::new(cli.query.as_deref().unwrap_or_default(), config.theme);

    // 5. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);
    restore_terminal(&mut terminal)?;

    // 6. 打印最后的查询字符串
    let location = app.location();
    if !location.is_empty() {
        println!("?{location}");
    }

    tracing::info!("doh-playground exiting");
    result
}
