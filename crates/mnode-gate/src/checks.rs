//! Precondition checks, one function per rule.
//!
//! Each check either passes or fails with the error the caller is meant
//! to see; the validator strings them together in a fixed fail-fast
//! order. Checks never mutate state — registration side effects
//! (placeholder backfill) belong to the chain manager.

use mnode_access::AccessError;
use mnode_store::{StoreError, StoreTxn};
use mnode_types::{
    AuthContext, Did, IdClass, ObjectRecord, ParsedObjectMetadata, Permission, PUBLIC_SUBJECT,
};

use crate::config::ValidatorConfig;
use crate::error::{GateError, GateResult};

/// Longest accepted identifier string, in bytes.
const MAX_DID_LEN: usize = 800;

/// An identifier must be non-empty, fit the length cap, and carry no
/// whitespace.
pub fn valid_did(did: &Did) -> GateResult<()> {
    let s = did.as_str();
    if s.is_empty() {
        return Err(GateError::InvalidRequest("empty identifier".to_string()));
    }
    if s.len() > MAX_DID_LEN {
        return Err(GateError::InvalidRequest(format!(
            "identifier exceeds {MAX_DID_LEN} bytes"
        )));
    }
    if s.chars().any(char::is_whitespace) {
        return Err(GateError::InvalidRequest(format!(
            "identifier contains whitespace: {s:?}"
        )));
    }
    Ok(())
}

/// Structural sanity of an incoming metadata document.
pub fn metadata_sanity(meta: &ParsedObjectMetadata) -> GateResult<()> {
    if meta.submitter.is_empty() {
        return Err(GateError::InvalidRequest("missing submitter".to_string()));
    }
    if meta.rights_holder.is_empty() {
        return Err(GateError::InvalidRequest(
            "missing rights holder".to_string(),
        ));
    }
    if meta.checksum.value.is_empty() || meta.checksum.algorithm.is_empty() {
        return Err(GateError::InvalidRequest("missing checksum".to_string()));
    }
    Ok(())
}

/// Auth combination sanity for mutating calls.
///
/// A context asserting no subjects at all is malformed; an
/// unauthenticated caller is well-formed but denied write access.
pub fn write_auth(auth: &AuthContext, config: &ValidatorConfig, pid: &Did) -> GateResult<()> {
    if auth.subjects.is_empty() {
        return Err(GateError::InvalidRequest(
            "auth context asserts no subjects".to_string(),
        ));
    }
    if config.require_authenticated_writes && !auth.is_authenticated {
        return Err(GateError::Access(AccessError::NotAuthorized {
            pid: pid.to_string(),
            subject: auth
                .subjects
                .first()
                .cloned()
                .unwrap_or_else(|| PUBLIC_SUBJECT.to_string()),
            required: Permission::Write,
        }));
    }
    Ok(())
}

/// A PID for a new object must be unused or a replica placeholder
/// (an expected revision arriving out of order).
pub fn pid_available(txn: &dyn StoreTxn, pid: &Did) -> GateResult<()> {
    match txn.classify(pid) {
        IdClass::Unused | IdClass::ReplicaPlaceholder => Ok(()),
        IdClass::Pid | IdClass::Sid => {
            Err(GateError::Store(StoreError::IdentifierAlreadyInUse(
                pid.clone(),
            )))
        }
    }
}

/// A supplied SID must not name an object or an expected object.
///
/// An already-bound SID is acceptable here; whether it is compatible
/// with the target chain is the chain manager's decision.
pub fn sid_usable(txn: &dyn StoreTxn, sid: &Did) -> GateResult<()> {
    match txn.classify(sid) {
        IdClass::Unused | IdClass::Sid => Ok(()),
        IdClass::Pid => Err(GateError::InvalidRequest(format!(
            "series id {sid} names an existing object"
        ))),
        IdClass::ReplicaPlaceholder => Err(GateError::InvalidRequest(format!(
            "series id {sid} names an expected object revision"
        ))),
    }
}

/// Content mutation requires an unarchived object.
pub fn not_archived(record: &ObjectRecord) -> GateResult<()> {
    if record.archived {
        return Err(GateError::AlreadyArchived(record.pid.clone()));
    }
    Ok(())
}

/// An object already replaced by a newer revision cannot be updated
/// again.
pub fn not_obsoleted(record: &ObjectRecord) -> GateResult<()> {
    if let Some(successor) = &record.obsoleted_by {
        return Err(GateError::InvalidRequest(format!(
            "{} is already obsoleted by {successor}",
            record.pid
        )));
    }
    Ok(())
}

/// The `obsoletes` field of an update document, when present, must name
/// the object being updated.
pub fn obsoletes_matches(meta: &ParsedObjectMetadata, old_pid: &Did) -> GateResult<()> {
    if let Some(obsoletes) = &meta.obsoletes {
        if obsoletes != old_pid {
            return Err(GateError::InvalidRequest(format!(
                "obsoletes names {obsoletes}, expected {old_pid}"
            )));
        }
    }
    Ok(())
}

/// Identity-defining fields are set once by create() and never change.
pub fn identity_fields_unchanged(
    old: &ObjectRecord,
    meta: &ParsedObjectMetadata,
) -> GateResult<()> {
    let immutable = |field: &'static str| GateError::ImmutableFieldViolation {
        pid: old.pid.clone(),
        field,
    };
    if meta.pid != old.pid {
        return Err(immutable("pid"));
    }
    if meta.format_id != old.format_id {
        return Err(immutable("formatId"));
    }
    if meta.checksum != old.checksum {
        return Err(immutable("checksum"));
    }
    if meta.size != old.size {
        return Err(immutable("size"));
    }
    if meta.submitter != old.submitter {
        return Err(immutable("submitter"));
    }
    Ok(())
}
