//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//!     - handler.rs   轮询终端事件，并根据当前状态翻译为消息
//!     - keymap.rs    默认快捷键
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
