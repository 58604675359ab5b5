//! Connector Console Core Library
//!
//! Provides the lifecycle logic behind the connector management console, including:
//! - Per-connector lifecycle control (`ConnectorLifecycleController`)
//! - Page, selection and pagination ownership (`ConnectorsCollectionController`)
//! - The confirm/cancel guard in front of deletes (`ConfirmationGate`)
//! - Status label resolution (`StatusLabelResolver`)
//!
//! This library is platform-independent: the connector backend is abstracted
//! through traits, and completions arrive through a status event channel.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    row_actions, ActionOutcome, Capabilities, ConfirmationGate, ConnectorLifecycleController,
    ConnectorSnapshot, ConnectorsCollectionController, GateState, RowAction, RowActionItem,
    SelectionRequest, ServiceContext, StatusLabelResolver, StatusLabels, ROW_ACTIONS,
};
pub use traits::{
    status_channel, ConnectorListing, LifecycleBackend, StatusEventReceiver, StatusEventSender,
};
pub use types::{
    Connector, ConnectorMetadata, ConnectorStatus, LifecycleCommand, PaginatedResponse,
    PaginationParams, PaginationWindow, StatusEvent,
};
