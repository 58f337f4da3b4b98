use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::AccessRule;
use crate::identifier::{ChainId, Did};
use crate::replica::{ReplicaInfo, ReplicationPolicy};

/// A checksum over an object's bytes, as asserted by the submitter.
///
/// The algorithm name is carried verbatim from the wire document
/// (e.g. `"MD5"`, `"SHA-1"`); this system never recomputes checksums.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub algorithm: String,
    pub value: String,
}

impl Checksum {
    pub fn new(algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            value: value.into(),
        }
    }
}

/// One immutable object revision.
///
/// Identity fields (`format_id`, `checksum`, `size`, `submitter`) are set
/// once by create() and never change; a content change is always a new
/// record linked via `obsoletes`/`obsoleted_by`. The mutable remainder
/// (`archived`, `access_rules`, `replication_policy`, the revision links
/// themselves) is rewritten in place by the store.
///
/// Invariant over all linked pairs:
/// `a.obsoleted_by == Some(b.pid)` iff `b.obsoletes == Some(a.pid)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub pid: Did,
    pub format_id: String,
    pub checksum: Checksum,
    pub size: u64,
    pub submitter: String,
    pub rights_holder: String,
    pub origin_node: String,
    pub authoritative_node: String,
    /// PID of the revision this record replaces, if any. May name an
    /// object that has not arrived yet.
    pub obsoletes: Option<Did>,
    /// PID of the revision that replaces this record, if any. May name
    /// an object that has not arrived yet.
    pub obsoleted_by: Option<Did>,
    pub archived: bool,
    pub uploaded_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Opaque locator into the external byte store. Never interpreted.
    pub storage_locator: String,
    pub access_rules: Vec<AccessRule>,
    pub replication_policy: ReplicationPolicy,
    pub replicas: Vec<ReplicaInfo>,
}

impl ObjectRecord {
    /// Whether this record carries any revision link.
    pub fn has_revision_links(&self) -> bool {
        self.obsoletes.is_some() || self.obsoleted_by.is_some()
    }
}

/// One revision sequence.
///
/// A chain exists for every known object, including standalone ones. At
/// most one SID may ever be bound to a chain; once bound it is permanent
/// and can never move to another chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: ChainId,
    /// The series identifier bound to this chain, if any.
    pub sid: Option<Did>,
    /// PID of the newest *existing* member. Always recomputed from the
    /// revision links after a mutation, never trusted from a cache.
    pub head_pid: Did,
}

impl Chain {
    /// Create a new standalone chain with `head_pid` as sole member.
    pub fn standalone(head_pid: Did) -> Self {
        Self {
            id: ChainId::new(),
            sid: None,
            head_pid,
        }
    }
}
