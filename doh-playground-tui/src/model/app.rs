//! 应用主状态结构

use doh_playground_core::QueryParams;

use super::{Focus, FormState, History, ResultsState, Theme};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: Focus,

    /// 查询表单
    pub form: FormState,

    /// 查询结果
    pub results: ResultsState,

    /// 查询字符串历史
    pub history: History,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助
    pub show_help: bool,

    /// 当前主题
    pub theme: Theme,
}

impl App {
    /// 以启动时的查询字符串创建应用
    pub fn new(launch_query: &str, theme: Theme) -> Self {
        let params = QueryParams::parse(launch_query);
        Self {
            should_quit: false,
            focus: Focus::default(),
            form: FormState::from_params(&params),
            results: ResultsState::new(),
            history: History::new(doh_playground_core::query_part(launch_query)),
            status_message: None,
            show_help: false,
            theme,
        }
    }

    /// 当前"地址栏"中的查询字符串
    pub fn location(&self) -> &str {
        self.history.current()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new("", Theme::default())
    }
}
