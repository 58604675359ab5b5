//! Lifecycle command abstract Trait

use tokio::sync::mpsc;

use crate::error::CoreResult;
use crate::types::StatusEvent;

/// Sending half of the status event stream
pub type StatusEventSender = mpsc::UnboundedSender<StatusEvent>;

/// Receiving half of the status event stream
pub type StatusEventReceiver = mpsc::UnboundedReceiver<StatusEvent>;

/// Create the status event stream shared by a backend and the UI loop
pub fn status_channel() -> (StatusEventSender, StatusEventReceiver) {
    mpsc::unbounded_channel()
}

/// Lifecycle command backend Trait
///
/// Commands are fire-and-forget: `Ok(())` means the command was issued, and
/// its completion is delivered later as a [`StatusEvent`]. An immediate
/// [`CoreError::CommandRejected`](crate::CoreError::CommandRejected) means
/// the backend refused the command outright.
pub trait LifecycleBackend: Send + Sync {
    /// Issue a start command
    ///
    /// # Arguments
    /// * `id` - Connector ID
    fn send_start(&self, id: &str) -> CoreResult<()>;

    /// Issue a stop command
    ///
    /// # Arguments
    /// * `id` - Connector ID
    fn send_stop(&self, id: &str) -> CoreResult<()>;

    /// Issue a delete command
    ///
    /// # Arguments
    /// * `id` - Connector ID
    fn send_delete(&self, id: &str) -> CoreResult<()>;
}
