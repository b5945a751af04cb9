//! 应用主消息枚举

use doh_playground_core::QueryOutcome;

use super::{FormMessage, ResultsMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 焦点移到下一个区域
    FocusNext,

    /// 焦点移到上一个区域
    FocusPrev,

    /// 表单相关消息
    Form(FormMessage),

    /// 结果表格相关消息
    Results(ResultsMessage),

    /// 提交查询
    Submit,

    /// 重置表单与结果
    Reset,

    /// 历史后退
    HistoryBack,

    /// 历史前进
    HistoryForward,

    /// 复制区域文件格式的结果
    CopyZone,

    /// 切换主题
    ToggleTheme,

    /// 查询完成（由 Backend 发回）
    QueryFinished(QueryOutcome),

    /// 设置状态消息
    SetStatus(String),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
