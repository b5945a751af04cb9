//! 焦点状态定义

/// 当前获得焦点的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 解析器选择
    Resolver,
    /// 域名输入框
    #[default]
    Domain,
    /// 记录类型多选
    Types,
    /// 结果表格
    Results,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Resolver, Focus::Domain, Focus::Types, Focus::Results];

    /// 切换到下一个区域
    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    /// 切换到上一个区域
    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
