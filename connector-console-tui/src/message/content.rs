//! 内容面板消息

use connector_console_core::RowAction;

/// 连接器表格相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 光标到第一行
    SelectFirst,
    /// 光标到最后一行
    SelectLast,
    /// 选中光标所在的连接器（等同于点击行）
    Confirm,
    /// 打开行操作菜单
    OpenActions,
    /// 对光标所在行执行操作
    Action(RowAction),
    /// 下一页
    NextPage,
    /// 上一页
    PrevPage,
    /// 取消选中
    ClearSelection,
}
