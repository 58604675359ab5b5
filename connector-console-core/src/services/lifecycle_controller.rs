//! Per-connector lifecycle controller

use std::sync::Arc;

use crate::traits::LifecycleBackend;
use crate::types::{Connector, ConnectorStatus, LifecycleCommand};

/// Actions currently legal for a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_start: bool,
    pub can_stop: bool,
    pub can_delete: bool,
}

impl Capabilities {
    /// Fixed capability table
    pub fn for_status(status: ConnectorStatus) -> Self {
        match status {
            ConnectorStatus::Stopped | ConnectorStatus::Failed => Self {
                can_start: true,
                can_stop: false,
                can_delete: true,
            },
            ConnectorStatus::Running => Self {
                can_start: false,
                can_stop: true,
                can_delete: false,
            },
            ConnectorStatus::Starting
            | ConnectorStatus::Stopping
            | ConnectorStatus::Deleting
            | ConnectorStatus::Deleted
            | ConnectorStatus::Unknown => Self::default(),
        }
    }
}

/// Render-ready view of one connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSnapshot {
    pub connector: Connector,
    pub capabilities: Capabilities,
}

/// Selection notification addressed to the owning collection controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub id: String,
}

/// Lifecycle controller for a single connector
///
/// The only writer of its connector's status. Commands whose guard is false
/// are ignored without error, so a stale render can never issue a second
/// command while one is outstanding.
pub struct ConnectorLifecycleController {
    connector: Connector,
    pending: Option<LifecycleCommand>,
    backend: Arc<dyn LifecycleBackend>,
}

impl ConnectorLifecycleController {
    #[must_use]
    pub fn new(connector: Connector, backend: Arc<dyn LifecycleBackend>) -> Self {
        Self {
            connector,
            pending: None,
            backend,
        }
    }

    pub fn id(&self) -> &str {
        &self.connector.id
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    pub fn status(&self) -> ConnectorStatus {
        self.connector.status
    }

    /// Command issued locally and not yet acknowledged by a status event
    pub fn pending(&self) -> Option<LifecycleCommand> {
        self.pending
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_status(self.connector.status)
    }

    pub fn snapshot(&self) -> ConnectorSnapshot {
        ConnectorSnapshot {
            connector: self.connector.clone(),
            capabilities: self.capabilities(),
        }
    }

    /// Start the connector.
    ///
    /// Returns `true` once the backend accepted the command; `false` when the
    /// guard ignored the call or the backend rejected it.
    pub fn start(&mut self) -> bool {
        if !self.capabilities().can_start {
            self.log_ignored(LifecycleCommand::Start);
            return false;
        }
        self.issue(LifecycleCommand::Start, ConnectorStatus::Starting)
    }

    /// Stop the connector. Same return contract as [`Self::start`].
    pub fn stop(&mut self) -> bool {
        if !self.capabilities().can_stop {
            self.log_ignored(LifecycleCommand::Stop);
            return false;
        }
        self.issue(LifecycleCommand::Stop, ConnectorStatus::Stopping)
    }

    /// Ask whether a delete may be confirmed. Never mutates status.
    pub fn request_delete(&self) -> bool {
        let allowed = self.capabilities().can_delete;
        if !allowed {
            self.log_ignored(LifecycleCommand::Delete);
        }
        allowed
    }

    /// Issue the delete after confirmation. The guard is re-checked because
    /// the status may have moved while the confirmation was open.
    pub fn confirm_delete(&mut self) -> bool {
        if !self.capabilities().can_delete {
            self.log_ignored(LifecycleCommand::Delete);
            return false;
        }
        self.issue(LifecycleCommand::Delete, ConnectorStatus::Deleting)
    }

    pub fn select(&self) -> SelectionRequest {
        SelectionRequest {
            id: self.connector.id.clone(),
        }
    }

    /// Apply a backend status event. The last event to arrive wins.
    pub fn apply_status(&mut self, status: ConnectorStatus) -> ConnectorStatus {
        let previous = self.connector.status;
        self.connector.status = status;
        self.pending = None;
        log::debug!(
            "Connector {} status {previous:?} -> {status:?}",
            self.connector.id
        );
        previous
    }

    /// Merge a re-fetched copy of this connector.
    ///
    /// Metadata and type always follow the backend; the status is kept while
    /// a locally issued command is still unacknowledged.
    pub fn refresh(&mut self, fetched: Connector) {
        let local_status = self.connector.status;
        let keep_local = self.pending.is_some();
        self.connector = fetched;
        if keep_local {
            self.connector.status = local_status;
        }
    }

    /// 乐观切换状态并发送命令；后端当场拒绝时回到 failed 并返回 `false`
    fn issue(&mut self, command: LifecycleCommand, optimistic: ConnectorStatus) -> bool {
        let id = self.connector.id.clone();
        self.connector.status = optimistic;
        self.pending = Some(command);

        let result = match command {
            LifecycleCommand::Start => self.backend.send_start(&id),
            LifecycleCommand::Stop => self.backend.send_stop(&id),
            LifecycleCommand::Delete => self.backend.send_delete(&id),
        };

        match result {
            Ok(()) => {
                log::info!("Issued {command} for connector {id}");
                true
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{e}");
                } else {
                    log::error!("Failed to issue {command} for connector {id}: {e}");
                }
                self.connector.status = ConnectorStatus::Failed;
                self.pending = None;
                false
            }
        }
    }

    fn log_ignored(&self, command: LifecycleCommand) {
        log::debug!(
            "Ignoring {command} for connector {} in status {:?}",
            self.connector.id,
            self.connector.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{connector, MockLifecycleBackend};

    fn controller_with(
        status: ConnectorStatus,
    ) -> (ConnectorLifecycleController, Arc<MockLifecycleBackend>) {
        let backend = Arc::new(MockLifecycleBackend::new());
        let ctrl = ConnectorLifecycleController::new(connector("c1", status), backend.clone());
        (ctrl, backend)
    }

    #[test]
    fn capability_table_matches_status() {
        for status in ConnectorStatus::ALL {
            let caps = Capabilities::for_status(status);
            let startable = matches!(status, ConnectorStatus::Stopped | ConnectorStatus::Failed);
            assert_eq!(caps.can_start, startable, "{status:?}");
            assert_eq!(caps.can_delete, startable, "{status:?}");
            assert_eq!(caps.can_stop, status == ConnectorStatus::Running, "{status:?}");
            assert!(!(caps.can_stop && caps.can_start));
        }
    }

    #[test]
    fn start_transitions_optimistically() {
        let (mut ctrl, backend) = controller_with(ConnectorStatus::Stopped);

        assert!(ctrl.start());

        assert_eq!(ctrl.status(), ConnectorStatus::Starting);
        assert_eq!(ctrl.pending(), Some(LifecycleCommand::Start));
        assert_eq!(ctrl.snapshot().capabilities, Capabilities::default());
        assert_eq!(backend.sent(), vec![(LifecycleCommand::Start, "c1".to_string())]);
    }

    #[test]
    fn guarded_commands_are_noops() {
        let (mut ctrl, backend) = controller_with(ConnectorStatus::Running);

        assert!(!ctrl.start());
        assert!(!ctrl.request_delete());
        assert!(!ctrl.confirm_delete());
        assert_eq!(ctrl.status(), ConnectorStatus::Running);

        let (mut ctrl, _) = controller_with(ConnectorStatus::Stopped);
        assert!(!ctrl.stop());
        assert_eq!(ctrl.status(), ConnectorStatus::Stopped);

        assert!(backend.sent().is_empty());
    }

    #[test]
    fn repeated_start_is_sent_once() {
        let (mut ctrl, backend) = controller_with(ConnectorStatus::Failed);

        assert!(ctrl.start());
        assert!(!ctrl.start());

        assert_eq!(backend.count(LifecycleCommand::Start), 1);
    }

    #[test]
    fn request_delete_does_not_mutate() {
        let (ctrl, backend) = controller_with(ConnectorStatus::Stopped);
        assert!(ctrl.request_delete());
        assert_eq!(ctrl.status(), ConnectorStatus::Stopped);
        assert!(backend.sent().is_empty());
    }

    #[test]
    fn rejected_command_surfaces_as_failed() {
        let (mut ctrl, backend) = controller_with(ConnectorStatus::Stopped);
        backend.set_reject(Some("quota exceeded".to_string()));

        assert!(!ctrl.start());

        assert_eq!(ctrl.status(), ConnectorStatus::Failed);
        assert_eq!(ctrl.pending(), None);

        // failed connectors stay actionable
        backend.set_reject(None);
        assert!(ctrl.start());
        assert_eq!(ctrl.status(), ConnectorStatus::Starting);
    }

    #[test]
    fn status_event_clears_pending() {
        let (mut ctrl, _) = controller_with(ConnectorStatus::Stopped);
        ctrl.start();

        let previous = ctrl.apply_status(ConnectorStatus::Running);

        assert_eq!(previous, ConnectorStatus::Starting);
        assert_eq!(ctrl.pending(), None);
        assert!(ctrl.capabilities().can_stop);
    }

    #[test]
    fn refresh_keeps_optimistic_status_while_pending() {
        let (mut ctrl, _) = controller_with(ConnectorStatus::Stopped);
        ctrl.start();

        let mut fetched = connector("c1", ConnectorStatus::Stopped);
        fetched.metadata.name = Some("renamed".to_string());
        ctrl.refresh(fetched);

        assert_eq!(ctrl.status(), ConnectorStatus::Starting);
        assert_eq!(ctrl.connector().name(), Some("renamed"));

        ctrl.apply_status(ConnectorStatus::Running);
        ctrl.refresh(connector("c1", ConnectorStatus::Stopped));
        assert_eq!(ctrl.status(), ConnectorStatus::Stopped);
    }

    #[test]
    fn select_names_this_connector() {
        let (ctrl, _) = controller_with(ConnectorStatus::Unknown);
        assert_eq!(ctrl.select().id, "c1");
    }
}
