//! 业务逻辑服务层

mod collection_controller;
mod confirmation_gate;
mod lifecycle_controller;
mod row_actions;
mod status_label;

pub use collection_controller::{ActionOutcome, ConnectorsCollectionController};
pub use confirmation_gate::{ConfirmationGate, GateState};
pub use lifecycle_controller::{
    Capabilities, ConnectorLifecycleController, ConnectorSnapshot, SelectionRequest,
};
pub use row_actions::{row_actions, RowAction, RowActionItem, ROW_ACTIONS};
pub use status_label::{StatusLabelResolver, StatusLabels};

pub use crate::types::LifecycleCommand;

use std::sync::Arc;

use crate::traits::{ConnectorListing, LifecycleBackend};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的后端实现。
pub struct ServiceContext {
    /// Connector 列表后端
    pub listing: Arc<dyn ConnectorListing>,
    /// 生命周期命令后端
    pub lifecycle_backend: Arc<dyn LifecycleBackend>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        listing: Arc<dyn ConnectorListing>,
        lifecycle_backend: Arc<dyn LifecycleBackend>,
    ) -> Self {
        Self {
            listing,
            lifecycle_backend,
        }
    }
}
