use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("unknown permission action: {0}")]
    UnknownPermission(String),

    #[error("unknown replica status: {0}")]
    UnknownReplicaStatus(String),
}
