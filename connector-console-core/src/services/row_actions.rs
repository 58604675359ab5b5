//! Fixed per-row action table

use super::lifecycle_controller::{Capabilities, ConnectorSnapshot};

/// Entries of the row actions control, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Start,
    Stop,
    Delete,
    Separator,
    Details,
}

/// The action table. Dispatch goes through
/// [`ConnectorsCollectionController::perform`](super::ConnectorsCollectionController::perform).
pub const ROW_ACTIONS: [RowAction; 5] = [
    RowAction::Start,
    RowAction::Stop,
    RowAction::Delete,
    RowAction::Separator,
    RowAction::Details,
];

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Delete => "Delete",
            Self::Separator => "",
            Self::Details => "Details",
        }
    }

    pub fn is_separator(self) -> bool {
        self == Self::Separator
    }

    /// Whether the entry is enabled for the given capabilities
    pub fn guard(self, caps: &Capabilities) -> bool {
        match self {
            Self::Start => caps.can_start,
            Self::Stop => caps.can_stop,
            Self::Delete => caps.can_delete,
            Self::Separator => false,
            Self::Details => true,
        }
    }
}

/// An action entry evaluated for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActionItem {
    pub action: RowAction,
    pub enabled: bool,
}

/// Evaluate the action table against a snapshot
pub fn row_actions(snapshot: &ConnectorSnapshot) -> [RowActionItem; 5] {
    ROW_ACTIONS.map(|action| RowActionItem {
        action,
        enabled: action.guard(&snapshot.capabilities),
    })
}
