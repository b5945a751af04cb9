//! 查询表单状态

use doh_playground_core::{resolver_index, QueryParams, RecordType, Resolver, RESOLVERS};

/// 表单：解析器、域名与记录类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// 当前解析器在 `RESOLVERS` 中的索引
    pub resolver_index: usize,
    /// 域名输入（逗号分隔）
    pub domain: String,
    /// 已选中的记录类型，按选中顺序排列
    pub types: Vec<RecordType>,
    /// 类型列表中的光标位置（`RecordType::ALL` 索引）
    pub type_cursor: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_params(&QueryParams::default())
    }
}

impl FormState {
    /// 从查询参数加载表单
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            resolver_index: resolver_index(&params.resolver),
            domain: params.domain.clone(),
            types: params.record_types(),
            type_cursor: 0,
        }
    }

    /// 导出为查询参数
    pub fn to_params(&self) -> QueryParams {
        QueryParams {
            resolver: self.resolver().name.to_string(),
            domain: self.domain.clone(),
            types: self.types.iter().map(ToString::to_string).collect(),
        }
    }

    /// 用查询参数覆盖表单，保留类型光标
    pub fn load(&mut self, params: &QueryParams) {
        let cursor = self.type_cursor;
        *self = Self::from_params(params);
        self.type_cursor = cursor;
    }

    /// 当前解析器
    pub fn resolver(&self) -> &'static Resolver {
        &RESOLVERS[self.resolver_index % RESOLVERS.len()]
    }

    pub fn next_resolver(&mut self) {
        self.resolver_index = (self.resolver_index + 1) % RESOLVERS.len();
    }

    pub fn prev_resolver(&mut self) {
        self.resolver_index = (self.resolver_index + RESOLVERS.len() - 1) % RESOLVERS.len();
    }

    /// 输入字符
    pub fn push_char(&mut self, c: char) {
        self.domain.push(c);
    }

    /// 删除最后一个字符
    pub fn pop_char(&mut self) {
        self.domain.pop();
    }

    /// 清空域名输入
    pub fn clear_domain(&mut self) {
        self.domain.clear();
    }

    pub fn cursor_next(&mut self) {
        if self.type_cursor + 1 < RecordType::ALL.len() {
            self.type_cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.type_cursor = self.type_cursor.saturating_sub(1);
    }

    pub fn cursor_first(&mut self) {
        self.type_cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.type_cursor = RecordType::ALL.len().saturating_sub(1);
    }

    /// 光标处的记录类型
    pub fn cursor_type(&self) -> Option<RecordType> {
        RecordType::ALL.get(self.type_cursor).copied()
    }

    /// 切换光标处类型的选中状态
    ///
    /// 新选中的类型追加到末尾，查询按此顺序发出。
    pub fn toggle_type(&mut self) {
        let Some(record_type) = self.cursor_type() else {
            return;
        };
        if let Some(pos) = self.types.iter().position(|t| *t == record_type) {
            self.types.remove(pos);
        } else {
            self.types.push(record_type);
        }
    }

    pub fn is_selected(&self, record_type: RecordType) -> bool {
        self.types.contains(&record_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = FormState::default();
        assert_eq!(form.resolver().name, "Cloudflare");
        assert!(form.domain.is_empty());
        assert_eq!(
            form.types,
            vec![RecordType::A, RecordType::Aaaa, RecordType::Cname]
        );
    }

    #[test]
    fn test_params_round_trip() {
        let params = QueryParams::parse("resolver=Google&domain=example.com&types=MX&types=A");
        let form = FormState::from_params(&params);
        assert_eq!(form.resolver().name, "Google");
        assert_eq!(form.types, vec![RecordType::Mx, RecordType::A]);
        assert_eq!(form.to_params(), params);
    }

    #[test]
    fn test_resolver_cycle() {
        let mut form = FormState::default();
        form.next_resolver();
        assert_eq!(form.resolver().name, "Google");
        form.next_resolver();
        assert_eq!(form.resolver().name, "Cloudflare");
        form.prev_resolver();
        assert_eq!(form.resolver().name, "Google");
    }

    #[test]
    fn test_toggle_type() {
        let mut form = FormState::default();
        // 光标在 A 上
        form.cursor_first();
        form.toggle_type();
        assert!(!form.is_selected(RecordType::A));
        form.toggle_type();
        assert_eq!(form.types.last(), Some(&RecordType::A));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut form = FormState::default();
        form.cursor_prev();
        assert_eq!(form.type_cursor, 0);
        form.cursor_last();
        form.cursor_next();
        assert_eq!(form.type_cursor, RecordType::ALL.len() - 1);
    }

    #[test]
    fn test_domain_editing() {
        let mut form = FormState::default();
        "a.test".chars().for_each(|c| form.push_char(c));
        form.pop_char();
        assert_eq!(form.domain, "a.tes");
        form.clear_domain();
        assert!(form.domain.is_empty());
    }
}
