//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染 UI
//!
//!     - layout.rs       整体布局（标题栏 / 表格 + 详情 / 分页栏 / 状态栏）
//!     - theme.rs        主题颜色与状态图标
//!     - pages/          页面（连接器表格）
//!     - components/     组件（详情面板、分页栏、状态栏、弹窗）
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
