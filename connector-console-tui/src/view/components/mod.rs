//! UI 组件

pub mod details;
pub mod modal;
pub mod pagination;
pub mod statusbar;
