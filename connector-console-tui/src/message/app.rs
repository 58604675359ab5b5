//! 应用主消息

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 主循环节拍：收取状态事件与分页结果
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
