//! 表单消息

/// 表单消息，作用于当前焦点所在的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符（域名）
    Input(char),
    /// 删除字符（域名）
    Backspace,
    /// 清空输入（域名）
    ClearInput,
    /// 上一个选项（解析器 / 类型光标）
    PrevOption,
    /// 下一个选项（解析器 / 类型光标）
    NextOption,
    /// 第一个类型
    FirstOption,
    /// 最后一个类型
    LastOption,
    /// 切换光标处类型
    ToggleType,
}
