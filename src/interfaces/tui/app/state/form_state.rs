//! 表单状态管理
//!
//! 管理缩短表单的两个输入框与别名区域的展开状态

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 待缩短的 URL 输入
    pub url: String,
    /// 自定义别名输入
    pub alias: String,
    /// 别名输入框是否展开（仅本地后端支持别名）
    pub alias_visible: bool,
}

impl FormState {
    /// 创建新的表单状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空输入并收起别名区域
    ///
    /// 成功提交后调用；展开状态不跨记录保留。
    pub fn clear(&mut self) {
        self.url.clear();
        self.alias.clear();
        self.alias_visible = false;
    }

    /// 两个输入框是否都为空
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.alias.is_empty()
    }
}
