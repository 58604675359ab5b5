//!
//! src/message/mod.rs
//! Message 层：事件到状态变更之间的契约
//!
//! Event 层把按键翻译成消息，Update 层消费消息。
//!     - AppMessage      全局消息（退出、刷新、切换语言/主题、Tick）
//!     - ContentMessage  连接器表格上的操作
//!     - ModalMessage    弹窗内的操作
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
