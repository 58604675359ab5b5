//! 类型定义模块

mod connector;
mod event;
mod pagination;

pub use connector::{Connector, ConnectorMetadata, ConnectorStatus, LifecycleCommand};
pub use event::StatusEvent;
pub use pagination::{PaginatedResponse, PaginationParams, PaginationWindow};
