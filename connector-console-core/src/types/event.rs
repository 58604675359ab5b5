//! Status event definitions

use serde::{Deserialize, Serialize};

use super::ConnectorStatus;

/// Out-of-band status change for one connector (`onStatusChanged`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Connector ID
    pub id: String,
    /// New status
    pub status: ConnectorStatus,
}

impl StatusEvent {
    pub fn new(id: impl Into<String>, status: ConnectorStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}
