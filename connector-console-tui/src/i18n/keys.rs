//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

use connector_console_core::StatusLabels;

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 连接器表格
    pub table: TableTexts,
    /// 连接器状态文本
    pub status: StatusLabels,
    /// 行操作菜单项
    pub actions: RowActionTexts,
    /// 详情面板
    pub details: DetailsTexts,
    /// 分页栏
    pub pagination: PaginationTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 键盘提示
    pub hints: HintTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

/// 表格文本
pub struct TableTexts {
    pub title: &'static str,
    pub name: &'static str,
    pub type_: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub actions: &'static str,
    /// 类别暂无数据来源时的占位符
    pub category_missing: &'static str,
    /// 名称尚未加载时的占位符
    pub unnamed: &'static str,
    pub empty: &'static str,
}

/// 行操作文本
pub struct RowActionTexts {
    pub title: &'static str,
    pub start: &'static str,
    pub stop: &'static str,
    pub delete: &'static str,
    pub details: &'static str,
}

/// 详情面板文本
pub struct DetailsTexts {
    pub title: &'static str,
    pub nothing_selected: &'static str,
    pub id: &'static str,
    pub created_at: &'static str,
    pub can_start: &'static str,
    pub can_stop: &'static str,
    pub can_delete: &'static str,
}

/// 分页文本
pub struct PaginationTexts {
    pub page: &'static str,
    pub of: &'static str,
    pub items: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub help: HelpTexts,
    pub error_title: &'static str,
}

/// 删除确认弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub lines: &'static [(&'static str, &'static str)],
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub loading_page: &'static str,
    pub page_load_failed: &'static str,
    pub command_issued: &'static str,
    pub command_rejected: &'static str,
    pub delete_issued: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub actions: &'static str,
    pub page: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}
