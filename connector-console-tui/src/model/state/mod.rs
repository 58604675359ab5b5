//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod connectors;
mod modal;

pub use connectors::ConnectorsState;
pub use modal::{next_menu_index, prev_menu_index, Modal, ModalState};
