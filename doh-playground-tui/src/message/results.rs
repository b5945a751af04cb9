//! 结果表格消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
}
