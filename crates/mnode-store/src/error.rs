use thiserror::Error;

use mnode_types::{ChainId, Did};

/// Errors produced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is already registered and cannot name a new object.
    #[error("identifier already in use: {0}")]
    IdentifierAlreadyInUse(Did),

    /// The identifier is not registered, or names no existing object.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(Did),

    /// No chain exists with the given surrogate id.
    #[error("unknown chain: {0}")]
    UnknownChain(ChainId),

    /// A chain was asked to be deleted while members still reference it.
    #[error("chain {0} still has members")]
    ChainNotEmpty(ChainId),

    /// The backing store itself failed (lock poisoning, I/O, transient
    /// serialization conflict). Retryable once by callers.
    #[error("store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
