//! Connector status display labels

use crate::types::ConnectorStatus;

/// One display label per connector status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabels {
    pub stopped: &'static str,
    pub starting: &'static str,
    pub running: &'static str,
    pub stopping: &'static str,
    pub deleting: &'static str,
    pub deleted: &'static str,
    pub failed: &'static str,
    pub unknown: &'static str,
}

impl StatusLabels {
    /// English labels
    pub const EN: Self = Self {
        stopped: "Stopped",
        starting: "Starting",
        running: "Running",
        stopping: "Stopping",
        deleting: "Deleting",
        deleted: "Deleted",
        failed: "Failed",
        unknown: "Unknown",
    };
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self::EN
    }
}

/// Maps a connector status to its display label
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusLabelResolver {
    labels: StatusLabels,
}

impl StatusLabelResolver {
    pub fn new(labels: StatusLabels) -> Self {
        Self { labels }
    }

    pub fn resolve(&self, status: ConnectorStatus) -> &'static str {
        match status {
            ConnectorStatus::Stopped => self.labels.stopped,
            ConnectorStatus::Starting => self.labels.starting,
            ConnectorStatus::Running => self.labels.running,
            ConnectorStatus::Stopping => self.labels.stopping,
            ConnectorStatus::Deleting => self.labels.deleting,
            ConnectorStatus::Deleted => self.labels.deleted,
            ConnectorStatus::Failed => self.labels.failed,
            ConnectorStatus::Unknown => self.labels.unknown,
        }
    }
}
