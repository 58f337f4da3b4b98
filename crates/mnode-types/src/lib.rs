//! Foundation types for the mnode metadata core.
//!
//! This crate provides the identifier, record, and policy types used
//! throughout the mnode system. Every other mnode crate depends on
//! `mnode-types`.
//!
//! # Key Types
//!
//! - [`Did`] — an identifier string in the node's namespace, classified
//!   dynamically as PID, SID, or replica placeholder
//! - [`ChainId`] — surrogate identifier for a revision chain (UUID v7)
//! - [`ObjectRecord`] — one immutable object revision
//! - [`Chain`] — a revision sequence with an optional series identifier
//! - [`Permission`] / [`AccessRule`] — the totally ordered access model
//! - [`ParsedObjectMetadata`] / [`AuthContext`] — inputs handed over by
//!   the wire-format and authentication collaborators

pub mod access;
pub mod error;
pub mod identifier;
pub mod metadata;
pub mod record;
pub mod replica;

pub use access::{AccessRule, Permission};
pub use error::TypeError;
pub use identifier::{ChainId, Did, IdClass};
pub use metadata::{AuthContext, ParsedObjectMetadata, PUBLIC_SUBJECT};
pub use record::{Chain, Checksum, ObjectRecord};
pub use replica::{ReplicaInfo, ReplicaStatus, ReplicationPolicy};
