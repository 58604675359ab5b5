//! Connector related type definitions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connector lifecycle status
///
/// Any status string the backend sends that is not listed here decodes as
/// [`ConnectorStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStatus {
    Stopped,
    Starting,
    Running,
    Stopping,
    Deleting,
    Deleted,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConnectorStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [ConnectorStatus; 8] = [
        Self::Stopped,
        Self::Starting,
        Self::Running,
        Self::Stopping,
        Self::Deleting,
        Self::Deleted,
        Self::Failed,
        Self::Unknown,
    ];

    /// Whether the connector is waiting on a backend acknowledgement
    #[must_use]
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Starting | Self::Stopping | Self::Deleting)
    }
}

/// User-visible connector metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorMetadata {
    /// Display name, absent while the backend is still provisioning it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A managed external integration instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    /// Stable unique identifier
    pub id: String,
    #[serde(default)]
    pub metadata: ConnectorMetadata,
    /// Connector type identifier
    pub connector_type_id: String,
    #[serde(default)]
    pub status: ConnectorStatus,
}

impl Connector {
    /// Create a connector with just a name and type
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        connector_type_id: impl Into<String>,
        status: ConnectorStatus,
    ) -> Self {
        Self {
            id: id.into(),
            metadata: ConnectorMetadata {
                name: Some(name.into()),
                created_at: None,
            },
            connector_type_id: connector_type_id.into(),
            status,
        }
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Connector category.
    ///
    /// The listing backend carries no category data yet, so this is always `None`.
    pub fn category(&self) -> Option<&str> {
        None
    }
}

/// Lifecycle command sent to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleCommand {
    Start,
    Stop,
    Delete,
}

impl fmt::Display for LifecycleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}
