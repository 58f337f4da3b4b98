//! Metadata validation gate.
//!
//! Every mutating call enters the system through [`MetadataValidator`]:
//! it runs the precondition checks in a fixed fail-fast order, consults
//! the access policy evaluator, and drives the object record store and
//! the revision chain manager inside one transaction. The gate is the
//! only mutation path — there is no bypass.
//!
//! Transient backend failures are retried exactly once; every other
//! error is surfaced verbatim to the caller.

pub mod checks;
pub mod config;
pub mod error;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{GateError, GateResult};
pub use validator::MetadataValidator;
