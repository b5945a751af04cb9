//! 查询结果状态
//!
//! 状态机：
//!
//!     Idle ──提交──▶ Loading ──完成──▶ Success / Empty / Failed
//!       ▲                                   │
//!       └───────────────重置────────────────┘
//!
//! 再次提交时从任一结束状态回到 Loading。

use doh_playground_core::{DnsRecord, QueryOutcome};

/// 查询状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// 尚未查询
    #[default]
    Idle,
    /// 查询中
    Loading,
    /// 有记录返回
    Success(Vec<DnsRecord>),
    /// 查询成功但没有记录
    Empty(String),
    /// 查询失败
    Failed(String),
}

impl QueryStatus {
    /// 由一次查询的结果得到结束状态
    pub fn from_outcome(outcome: QueryOutcome) -> Self {
        match outcome {
            QueryOutcome { error: Some(error), .. } => Self::Failed(error),
            QueryOutcome { records, info, .. } if records.is_empty() => {
                Self::Empty(info.unwrap_or_default())
            }
            QueryOutcome { records, .. } => Self::Success(records),
        }
    }

    /// 当前可显示的记录
    pub fn records(&self) -> &[DnsRecord] {
        match self {
            Self::Success(records) => records,
            _ => &[],
        }
    }

    pub fn info(&self) -> Option<&str> {
        match self {
            Self::Empty(info) => Some(info),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// 结果区域状态
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// 查询状态
    pub status: QueryStatus,
    /// 选中的行
    pub selected: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始查询：清除上一次的结果与提示
    pub fn start(&mut self) {
        self.status = QueryStatus::Loading;
        self.selected = 0;
    }

    /// 查询完成
    pub fn finish(&mut self, outcome: QueryOutcome) {
        self.status = QueryStatus::from_outcome(outcome);
        self.selected = 0;
    }

    /// 回到初始状态
    pub fn clear(&mut self) {
        self.status = QueryStatus::Idle;
        self.selected = 0;
    }

    pub fn records(&self) -> &[DnsRecord] {
        self.status.records()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records().len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.records().len().saturating_sub(1);
    }
}
