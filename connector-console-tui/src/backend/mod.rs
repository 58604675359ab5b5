//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责连接器数据与生命周期命令。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod demo_service;       // 演示后端（进程内连接器服务）
//!         mod page_loader;        // 后台分页加载
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在行操作菜单中选择"启动"
//!         ↓
//!     Update 层调用 ConnectorsCollectionController::perform
//!         ↓
//!     LifecycleBackend::send_start 立即返回（命令已发出）
//!         ↓
//!     后端完成后向状态事件通道发送 StatusEvent
//!         ↓
//!     主循环 Tick 时 drain_events，更新对应行
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod demo_service;
mod page_loader;

pub use config_service::{ConfigService, ConsoleConfig, LocalConfigService};
pub use demo_service::DemoConnectorService;
pub use page_loader::{spawn_page_load, PageLoad, PageLoadReceiver, PageLoadSender};
