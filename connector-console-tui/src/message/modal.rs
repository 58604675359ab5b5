//! 弹窗消息

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（删除确认弹窗中等同于取消）
    Close,
    /// 下一个字段 / 菜单项
    NextField,
    /// 上一个字段 / 菜单项
    PrevField,
    /// 确认当前焦点
    Confirm,
}
