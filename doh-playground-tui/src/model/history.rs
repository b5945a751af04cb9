//! 查询历史（相当于浏览器地址栏的前进/后退）

/// 查询字符串历史
///
/// 每个条目都是一个不带 `?` 的查询字符串，`index` 指向当前位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    /// 以启动时的查询字符串创建历史
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// 当前查询字符串
    pub fn current(&self) -> &str {
        self.entries.get(self.index).map_or("", String::as_str)
    }

    /// 写入新的条目，丢弃当前位置之后的条目
    ///
    /// 与当前条目相同时不新增。
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if entry == self.current() {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    /// 后退，返回新的当前条目
    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// 前进，返回新的当前条目
    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new("");
        history.push("domain=a.test");
        history.push("domain=b.test");

        assert_eq!(history.back(), Some("domain=a.test"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("domain=a.test"));
        assert_eq!(history.current(), "domain=a.test");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new("");
        history.push("domain=a.test");
        history.push("domain=b.test");
        history.back();
        history.push("domain=c.test");

        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("domain=a.test"));
    }

    #[test]
    fn test_push_same_entry_is_ignored() {
        let mut history = History::new("domain=a.test");
        history.push("domain=a.test");
        assert!(!history.can_go_back());
    }
}
