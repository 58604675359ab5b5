//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 页面数据状态（连接器页、弹窗）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub connectors: ConnectorsState,    // 连接器页面状态
//!             pub modal: ModalState,              // 弹窗状态
//!             pub config: ConsoleConfig,          // 语言 / 主题 / 每页条数
//!             ...                                 // 后端与两条异步结果通道
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、连接器页面状态（ConnectorsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ConnectorsState 包装 core 的 ConnectorsCollectionController：
//!         - collection：当前页、选中项、分页窗口（唯一写入者）
//!         - cursor：键盘光标所在行，按 Enter 时转换为 select()
//!         - loading / error：分页请求的指示状态，由调用方维护
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - RowActions { connector_id, cursor }
//!         - ConfirmDelete { connector_id, connector_name, gate, focus }
//!         - Help, Error { title, message }
//!
//!     数据流：
//!         用户按 d（或在行操作菜单中选择删除）
//!             ↓
//!         perform(Delete) 返回 ConfirmationRequired
//!             ↓
//!         app.modal.show_confirm_delete()，gate 进入 confirming
//!             ↓
//!         view/components/modal.rs 在 gate.is_confirming() 时绘制弹窗
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{ConnectorsState, Modal, ModalState};
