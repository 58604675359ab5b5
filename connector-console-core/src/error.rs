//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::LifecycleCommand;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Page load failed (transport or backend error)
    #[error("Failed to fetch page {page}: {message}")]
    FetchError { page: u32, message: String },

    /// Backend refused a lifecycle command
    #[error("Command {command} rejected for connector {id}: {reason}")]
    CommandRejected {
        id: String,
        command: LifecycleCommand,
        reason: String,
    },

    /// Selection target is not on the current page
    #[error("Connector not in current page: {0}")]
    InvalidSelection(String),

    /// Connector not found
    #[error("Connector not found: {0}")]
    ConnectorNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (races with a refresh, backend refusals),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CommandRejected { .. }
            | Self::InvalidSelection(_)
            | Self::ConnectorNotFound(_) => true,
            Self::FetchError { .. } | Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
