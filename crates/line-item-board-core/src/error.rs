//! Board Errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a remote collaborator.
///
/// Only the human-readable message crosses the boundary; it is shown to the
/// user verbatim in the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for GatewayError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Errors returned by board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A deletion is already awaiting confirmation or in flight
    #[error("a deletion is already pending")]
    DeletionPending,
    #[error("no deletion is pending")]
    NoPendingDeletion,
    /// The current profile may not perform the action
    #[error("action `{0}` is not permitted for the current profile")]
    NotPermitted(&'static str),
    #[error("unknown row action `{0}`")]
    UnknownAction(String),
    #[error("no line item with id `{0}`")]
    RowNotFound(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
