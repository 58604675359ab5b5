//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     - terminal.rs   终端的初始化和恢复
//!     - logging.rs    日志初始化（写入文件，避免破坏终端画面）
//!     - text.rs       按显示宽度截断文本
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate_to_width;
