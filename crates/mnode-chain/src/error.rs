use thiserror::Error;

use mnode_store::StoreError;
use mnode_types::Did;

/// Errors produced by chain operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The supplied revision link is unusable: self-reference, a cycle,
    /// or a SID conflict with the target chain. Recoverable by the
    /// caller — the request was wrong, not the store.
    #[error("invalid revision link for {pid}: {reason}")]
    InvalidRevisionLink { pid: Did, reason: String },

    /// Committed state violated a chain invariant. Indicates corruption
    /// of prior state; logged with full context and never auto-retried.
    #[error("chain invariant violated: {0}")]
    InternalFault(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ChainError {
    pub(crate) fn invalid(pid: &Did, reason: impl Into<String>) -> Self {
        Self::InvalidRevisionLink {
            pid: pid.clone(),
            reason: reason.into(),
        }
    }
}

pub type ChainResult<T> = Result<T, ChainError>;
