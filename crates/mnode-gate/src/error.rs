use thiserror::Error;

use mnode_access::AccessError;
use mnode_chain::ChainError;
use mnode_store::StoreError;
use mnode_types::Did;

/// Errors produced by the validation gate.
///
/// All variants are local, recoverable-by-caller validation errors
/// except wrapped internal faults and backend failures, which indicate
/// state corruption or infrastructure trouble respectively.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    /// An identity-defining field was changed on an existing record.
    #[error("field {field} of {pid} is immutable")]
    ImmutableFieldViolation { pid: Did, field: &'static str },

    /// A content mutation was attempted on an archived object.
    #[error("object {0} is already archived")]
    AlreadyArchived(Did),

    /// The request is structurally unusable (malformed identifier,
    /// missing subjects, contradictory fields).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GateError {
    /// Whether the error is a transient backend failure worth one retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::Backend(_))
                | Self::Chain(ChainError::Store(StoreError::Backend(_)))
        )
    }
}

pub type GateResult<T> = Result<T, GateError>;
