//! The operation facade.
//!
//! [`MetadataValidator`] owns the store handle and is the single entry
//! point for every read and mutation. Each mutating operation runs its
//! checks and its store/chain mutations inside one transaction, so a
//! failed check never leaves partial state behind.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use mnode_access::{assert_allowed, AccessError};
use mnode_chain as chain;
use mnode_store::{InMemoryStore, StoreTxn};
use mnode_types::{
    AuthContext, Did, IdClass, ObjectRecord, ParsedObjectMetadata, Permission,
};

use crate::checks;
use crate::config::ValidatorConfig;
use crate::error::{GateError, GateResult};

/// The metadata validation gate.
pub struct MetadataValidator {
    store: Arc<InMemoryStore>,
    config: ValidatorConfig,
}

impl MetadataValidator {
    /// Create a gate over the given store with the default config.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self::with_config(store, ValidatorConfig::default())
    }

    pub fn with_config(store: Arc<InMemoryStore>, config: ValidatorConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn is_trusted(&self, auth: &AuthContext) -> bool {
        auth.subjects
            .iter()
            .any(|s| self.config.trusted_subjects.contains(s))
    }

    /// Run a transaction, retrying exactly once on a transient backend
    /// failure. Validation errors and internal faults are never retried.
    fn run_txn<T>(
        &self,
        f: impl Fn(&mut dyn StoreTxn) -> GateResult<T>,
    ) -> GateResult<T> {
        match self.store.transaction(&f) {
            Err(e) if e.is_retryable() => {
                warn!(error = %e, "transient store failure, retrying once");
                self.store.transaction(&f)
            }
            other => other,
        }
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Accept a new object.
    ///
    /// `locator` is the opaque handle into the external byte store where
    /// the object's content was placed. Revision links naming objects
    /// that have not arrived yet are accepted and pre-registered as
    /// placeholders.
    pub fn create(
        &self,
        meta: &ParsedObjectMetadata,
        locator: &str,
        auth: &AuthContext,
    ) -> GateResult<ObjectRecord> {
        checks::valid_did(&meta.pid)?;
        checks::metadata_sanity(meta)?;

        let record = build_record(meta, locator);
        self.run_txn(move |txn| {
            checks::pid_available(txn, &meta.pid)?;
            checks::write_auth(auth, &self.config, &meta.pid)?;
            if let Some(sid) = &meta.series_id {
                checks::valid_did(sid)?;
                checks::sid_usable(txn, sid)?;
            }
            txn.insert_record(record.clone())?;
            chain::link(
                txn,
                &meta.pid,
                meta.series_id.as_ref(),
                meta.obsoletes.as_ref(),
                meta.obsoleted_by.as_ref(),
            )?;
            Ok(txn.record(&meta.pid)?)
        })
    }

    /// Accept a new revision of an existing object.
    ///
    /// Always creates a *new* record for `meta.pid`, linked to `old_pid`
    /// through `obsoletes`/`obsoleted_by`. The old record is never
    /// content-mutated.
    pub fn update(
        &self,
        old_pid: &Did,
        meta: &ParsedObjectMetadata,
        locator: &str,
        auth: &AuthContext,
    ) -> GateResult<ObjectRecord> {
        checks::valid_did(old_pid)?;
        checks::valid_did(&meta.pid)?;
        checks::metadata_sanity(meta)?;
        checks::obsoletes_matches(meta, old_pid)?;

        let trusted = self.is_trusted(auth);
        let record = build_record(meta, locator);
        self.run_txn(move |txn| {
            let old = txn.record(old_pid)?;
            checks::write_auth(auth, &self.config, &meta.pid)?;
            if !trusted {
                assert_allowed(&old, auth, Permission::Write)?;
            }
            if let Some(sid) = &meta.series_id {
                checks::valid_did(sid)?;
                checks::sid_usable(txn, sid)?;
            }
            checks::not_archived(&old)?;
            checks::not_obsoleted(&old)?;
            checks::pid_available(txn, &meta.pid)?;

            txn.insert_record(record.clone())?;
            chain::link(
                txn,
                &meta.pid,
                meta.series_id.as_ref(),
                Some(old_pid),
                meta.obsoleted_by.as_ref(),
            )?;
            Ok(txn.record(&meta.pid)?)
        })
    }

    /// Rewrite the mutable system metadata of an existing record.
    ///
    /// Identity fields must be unchanged; stored revision links cannot
    /// be redirected, but missing ones may be supplied (including a
    /// late series-id bind).
    pub fn update_metadata(
        &self,
        pid: &Did,
        meta: &ParsedObjectMetadata,
        auth: &AuthContext,
    ) -> GateResult<ObjectRecord> {
        checks::valid_did(pid)?;
        checks::metadata_sanity(meta)?;

        let trusted = self.is_trusted(auth);
        self.run_txn(move |txn| {
            let mut record = txn.record(pid)?;
            checks::write_auth(auth, &self.config, pid)?;
            if !trusted {
                assert_allowed(&record, auth, Permission::Write)?;
            }
            if let Some(sid) = &meta.series_id {
                checks::valid_did(sid)?;
                checks::sid_usable(txn, sid)?;
            }
            checks::identity_fields_unchanged(&record, meta)?;
            for (field, stored, supplied) in [
                ("obsoletes", &record.obsoletes, &meta.obsoletes),
                ("obsoletedBy", &record.obsoleted_by, &meta.obsoleted_by),
            ] {
                if supplied.is_some() && stored.is_some() && supplied != stored {
                    return Err(GateError::ImmutableFieldViolation {
                        pid: pid.clone(),
                        field,
                    });
                }
            }
            checks::not_archived(&record)?;

            record.archived = meta.archived;
            record.access_rules = meta.access_rules.clone();
            record.replication_policy = meta.replication_policy.clone();
            record.modified_at = Utc::now();
            txn.put_record(record)?;

            chain::link(
                txn,
                pid,
                meta.series_id.as_ref(),
                meta.obsoletes.as_ref(),
                meta.obsoleted_by.as_ref(),
            )?;
            Ok(txn.record(pid)?)
        })
    }

    /// Mark an object archived. Terminal for content mutation; the
    /// object stays in its chain and remains readable.
    pub fn archive(&self, pid: &Did, auth: &AuthContext) -> GateResult<ObjectRecord> {
        checks::valid_did(pid)?;
        let trusted = self.is_trusted(auth);
        self.run_txn(move |txn| {
            let mut record = txn.record(pid)?;
            checks::write_auth(auth, &self.config, pid)?;
            if !trusted {
                assert_allowed(&record, auth, Permission::Write)?;
            }
            checks::not_archived(&record)?;
            record.archived = true;
            record.modified_at = Utc::now();
            txn.put_record(record.clone())?;
            Ok(record)
        })
    }

    /// Remove an object entirely: cut it from its chain and drop its
    /// record. Restricted to trusted subjects.
    pub fn delete(&self, pid: &Did, auth: &AuthContext) -> GateResult<ObjectRecord> {
        checks::valid_did(pid)?;
        if !self.is_trusted(auth) {
            return Err(GateError::Access(AccessError::NotAuthorized {
                pid: pid.to_string(),
                subject: auth
                    .subjects
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "<no subject>".to_string()),
                required: Permission::ChangePermission,
            }));
        }
        self.run_txn(move |txn| Ok(chain::remove(txn, pid)?))
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// Fetch a record, enforcing read access.
    pub fn get(&self, pid: &Did, auth: &AuthContext) -> GateResult<ObjectRecord> {
        let trusted = self.is_trusted(auth);
        self.store.read(|txn| {
            let record = txn.record(pid)?;
            if !trusted {
                assert_allowed(&record, auth, Permission::Read)?;
            }
            Ok(record)
        })?
    }

    /// The PID a series identifier currently resolves to.
    pub fn resolve(&self, sid: &Did) -> GateResult<Did> {
        self.store.read(|txn| Ok(chain::resolve(txn, sid)?))?
    }

    /// The series identifier of the chain `pid` belongs to, if any.
    pub fn sid_of(&self, pid: &Did) -> GateResult<Option<Did>> {
        self.store.read(|txn| Ok(chain::sid_of(txn, pid)?))?
    }

    /// Classify an identifier string.
    pub fn classify(&self, did: &Did) -> GateResult<IdClass> {
        Ok(self.store.read(|txn| txn.classify(did))?)
    }
}

/// Materialize an [`ObjectRecord`] from an incoming document.
fn build_record(meta: &ParsedObjectMetadata, locator: &str) -> ObjectRecord {
    let now = Utc::now();
    ObjectRecord {
        pid: meta.pid.clone(),
        format_id: meta.format_id.clone(),
        checksum: meta.checksum.clone(),
        size: meta.size,
        submitter: meta.submitter.clone(),
        rights_holder: meta.rights_holder.clone(),
        origin_node: meta.origin_node.clone(),
        authoritative_node: meta.authoritative_node.clone(),
        obsoletes: meta.obsoletes.clone(),
        obsoleted_by: meta.obsoleted_by.clone(),
        archived: meta.archived,
        uploaded_at: now,
        modified_at: now,
        storage_locator: locator.to_string(),
        access_rules: meta.access_rules.clone(),
        replication_policy: meta.replication_policy.clone(),
        replicas: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mnode_access::AccessError;
    use mnode_chain::ChainError;
    use mnode_store::StoreError;
    use mnode_types::{AccessRule, Checksum, ReplicationPolicy};

    const OWNER: &str = "cn=owner,dc=example";
    const ADMIN: &str = "cn=admin,dc=example";

    fn meta(pid: &str) -> ParsedObjectMetadata {
        ParsedObjectMetadata {
            pid: Did::from(pid),
            format_id: "text/csv".to_string(),
            checksum: Checksum::new("SHA-1", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            size: 2048,
            submitter: OWNER.to_string(),
            rights_holder: OWNER.to_string(),
            origin_node: "urn:node:test".to_string(),
            authoritative_node: "urn:node:test".to_string(),
            obsoletes: None,
            obsoleted_by: None,
            series_id: None,
            archived: false,
            access_rules: Vec::new(),
            replication_policy: ReplicationPolicy::default(),
        }
    }

    fn gate() -> MetadataValidator {
        MetadataValidator::with_config(
            Arc::new(InMemoryStore::new()),
            ValidatorConfig::with_trusted([ADMIN]),
        )
    }

    fn owner() -> AuthContext {
        AuthContext::authenticated(OWNER)
    }

    // ---- Test 1: End-to-end revision chain lifecycle ----
    #[test]
    fn end_to_end_revision_lifecycle() {
        let gate = gate();
        let auth = owner();

        // Create p1: standalone, no sid.
        let p1 = gate.create(&meta("p1"), "file:///objects/p1", &auth).unwrap();
        assert_eq!(p1.pid, Did::from("p1"));
        assert_eq!(gate.sid_of(&Did::from("p1")).unwrap(), None);
        assert_eq!(gate.classify(&Did::from("p1")).unwrap(), IdClass::Pid);

        // Update to p2.
        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("p1"));
        let p2 = gate
            .update(&Did::from("p1"), &v2, "file:///objects/p2", &auth)
            .unwrap();
        assert_eq!(p2.obsoletes, Some(Did::from("p1")));
        let p1 = gate.get(&Did::from("p1"), &auth).unwrap();
        assert_eq!(p1.obsoleted_by, Some(Did::from("p2")));

        // Late sid bind through p2.
        let mut bind = meta("p2");
        bind.series_id = Some(Did::from("s1"));
        gate.update_metadata(&Did::from("p2"), &bind, &auth).unwrap();

        assert_eq!(gate.sid_of(&Did::from("p1")).unwrap(), Some(Did::from("s1")));
        assert_eq!(gate.sid_of(&Did::from("p2")).unwrap(), Some(Did::from("s1")));
        assert_eq!(gate.resolve(&Did::from("s1")).unwrap(), Did::from("p2"));
        assert_eq!(gate.classify(&Did::from("s1")).unwrap(), IdClass::Sid);
    }

    // ---- Test 2: Duplicate create is rejected ----
    #[test]
    fn duplicate_create_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let err = gate.create(&meta("p1"), "loc", &owner()).unwrap_err();
        assert_eq!(
            err,
            GateError::Store(StoreError::IdentifierAlreadyInUse(Did::from("p1")))
        );
    }

    // ---- Test 3: Unauthenticated writes are an access denial ----
    #[test]
    fn unauthenticated_create_is_not_authorized() {
        let gate = gate();
        let err = gate
            .create(&meta("p1"), "loc", &AuthContext::public())
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::Access(AccessError::NotAuthorized { .. })
        ));
        // Nothing was committed.
        assert_eq!(gate.classify(&Did::from("p1")).unwrap(), IdClass::Unused);
    }

    // ---- Test 4: Create with sid binds the chain ----
    #[test]
    fn create_with_sid_resolves() {
        let gate = gate();
        let mut m = meta("p1");
        m.series_id = Some(Did::from("s1"));
        gate.create(&m, "loc", &owner()).unwrap();
        assert_eq!(gate.resolve(&Did::from("s1")).unwrap(), Did::from("p1"));
    }

    // ---- Test 5: Update requires write permission ----
    #[test]
    fn update_requires_write_permission() {
        let gate = gate();
        let mut m = meta("p1");
        m.access_rules = vec![AccessRule::new("cn=reader,dc=example", Permission::Read)];
        gate.create(&m, "loc", &owner()).unwrap();

        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("p1"));
        let reader = AuthContext::authenticated("cn=reader,dc=example");
        let err = gate
            .update(&Did::from("p1"), &v2, "loc", &reader)
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::Access(AccessError::NotAuthorized { .. })
        ));
    }

    // ---- Test 6: Updating an archived object fails ----
    #[test]
    fn update_archived_object_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        gate.archive(&Did::from("p1"), &owner()).unwrap();

        let v2 = meta("p2");
        let err = gate
            .update(&Did::from("p1"), &v2, "loc", &owner())
            .unwrap_err();
        assert_eq!(err, GateError::AlreadyArchived(Did::from("p1")));
    }

    // ---- Test 7: An obsoleted object cannot be updated again ----
    #[test]
    fn update_of_obsoleted_object_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("p1"));
        gate.update(&Did::from("p1"), &v2, "loc", &owner()).unwrap();

        let v3 = meta("p3");
        let err = gate
            .update(&Did::from("p1"), &v3, "loc", &owner())
            .unwrap_err();
        assert!(matches!(err, GateError::InvalidRequest(_)));
    }

    // ---- Test 8: obsoletes must match the updated pid ----
    #[test]
    fn update_with_mismatched_obsoletes_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("other"));
        let err = gate
            .update(&Did::from("p1"), &v2, "loc", &owner())
            .unwrap_err();
        assert!(matches!(err, GateError::InvalidRequest(_)));
    }

    // ---- Test 9: Identity fields are immutable ----
    #[test]
    fn update_metadata_rejects_identity_changes() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();

        let mut changed = meta("p1");
        changed.size = 4096;
        let err = gate
            .update_metadata(&Did::from("p1"), &changed, &owner())
            .unwrap_err();
        assert_eq!(
            err,
            GateError::ImmutableFieldViolation {
                pid: Did::from("p1"),
                field: "size",
            }
        );
    }

    // ---- Test 10: Stored revision links cannot be redirected ----
    #[test]
    fn update_metadata_rejects_link_redirect() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("p1"));
        gate.update(&Did::from("p1"), &v2, "loc", &owner()).unwrap();

        let mut redirect = meta("p2");
        redirect.obsoletes = Some(Did::from("elsewhere"));
        let err = gate
            .update_metadata(&Did::from("p2"), &redirect, &owner())
            .unwrap_err();
        assert_eq!(
            err,
            GateError::ImmutableFieldViolation {
                pid: Did::from("p2"),
                field: "obsoletes",
            }
        );
    }

    // ---- Test 11: update_metadata rewrites the mutable fields ----
    #[test]
    fn update_metadata_rewrites_rules_and_policy() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();

        let mut m = meta("p1");
        m.access_rules = vec![AccessRule::new("cn=reader,dc=example", Permission::Read)];
        m.replication_policy = ReplicationPolicy {
            replication_allowed: true,
            number_replicas: 3,
            preferred_nodes: vec!["urn:node:mirror".to_string()],
            blocked_nodes: Vec::new(),
        };
        let updated = gate.update_metadata(&Did::from("p1"), &m, &owner()).unwrap();
        assert_eq!(updated.access_rules.len(), 1);
        assert!(updated.replication_policy.replication_allowed);

        // The reader grant now works.
        let reader = AuthContext::authenticated("cn=reader,dc=example");
        assert!(gate.get(&Did::from("p1"), &reader).is_ok());
    }

    // ---- Test 12: Archive is terminal ----
    #[test]
    fn archive_twice_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let archived = gate.archive(&Did::from("p1"), &owner()).unwrap();
        assert!(archived.archived);

        let err = gate.archive(&Did::from("p1"), &owner()).unwrap_err();
        assert_eq!(err, GateError::AlreadyArchived(Did::from("p1")));
        // Archived objects remain readable.
        assert!(gate.get(&Did::from("p1"), &owner()).is_ok());
    }

    // ---- Test 13: Delete is restricted to trusted subjects ----
    #[test]
    fn delete_requires_trusted_subject() {
        let gate = gate();
        let mut m = meta("p1");
        m.series_id = Some(Did::from("s1"));
        gate.create(&m, "loc", &owner()).unwrap();

        // The rights holder holds changePermission but is not trusted.
        let err = gate.delete(&Did::from("p1"), &owner()).unwrap_err();
        assert!(matches!(
            err,
            GateError::Access(AccessError::NotAuthorized { .. })
        ));

        let admin = AuthContext::authenticated(ADMIN);
        gate.delete(&Did::from("p1"), &admin).unwrap();
        assert_eq!(gate.classify(&Did::from("p1")).unwrap(), IdClass::Unused);
        // The sid was released with its chain.
        assert_eq!(gate.classify(&Did::from("s1")).unwrap(), IdClass::Unused);
    }

    // ---- Test 14: Deleting a mid-chain member keeps the sid live ----
    #[test]
    fn delete_embedded_member_keeps_chain_resolving() {
        let gate = gate();
        let admin = AuthContext::authenticated(ADMIN);
        let mut m1 = meta("p1");
        m1.series_id = Some(Did::from("s1"));
        gate.create(&m1, "loc", &owner()).unwrap();
        let mut m2 = meta("p2");
        m2.obsoletes = Some(Did::from("p1"));
        gate.update(&Did::from("p1"), &m2, "loc", &owner()).unwrap();
        let mut m3 = meta("p3");
        m3.obsoletes = Some(Did::from("p2"));
        gate.update(&Did::from("p2"), &m3, "loc", &owner()).unwrap();

        gate.delete(&Did::from("p2"), &admin).unwrap();

        assert_eq!(gate.resolve(&Did::from("s1")).unwrap(), Did::from("p3"));
        let p1 = gate.get(&Did::from("p1"), &owner()).unwrap();
        assert_eq!(p1.obsoleted_by, Some(Did::from("p3")));
    }

    // ---- Test 15: Out-of-order replica backfill ----
    #[test]
    fn out_of_order_backfill_joins_fragments() {
        let gate = gate();
        let auth = owner();

        // The successor arrives first, naming a predecessor we have
        // never seen. The reference is accepted, not rejected.
        let mut b = meta("b");
        b.obsoletes = Some(Did::from("a"));
        b.series_id = Some(Did::from("s"));
        gate.create(&b, "loc", &auth).unwrap();
        assert_eq!(
            gate.classify(&Did::from("a")).unwrap(),
            IdClass::ReplicaPlaceholder
        );
        assert_eq!(gate.resolve(&Did::from("s")).unwrap(), Did::from("b"));

        // The predecessor backfills into the same chain.
        let mut a = meta("a");
        a.obsoleted_by = Some(Did::from("b"));
        gate.create(&a, "loc", &auth).unwrap();
        assert_eq!(gate.classify(&Did::from("a")).unwrap(), IdClass::Pid);
        assert_eq!(gate.sid_of(&Did::from("a")).unwrap(), Some(Did::from("s")));
        assert_eq!(gate.resolve(&Did::from("s")).unwrap(), Did::from("b"));
    }

    // ---- Test 16: SID conflicts surface as InvalidRevisionLink ----
    #[test]
    fn sid_conflict_fails_atomically() {
        let gate = gate();
        let auth = owner();
        let mut m1 = meta("p1");
        m1.series_id = Some(Did::from("s1"));
        gate.create(&m1, "loc", &auth).unwrap();

        let mut v2 = meta("p2");
        v2.obsoletes = Some(Did::from("p1"));
        v2.series_id = Some(Did::from("s2"));
        let err = gate.update(&Did::from("p1"), &v2, "loc", &auth).unwrap_err();
        assert!(matches!(
            err,
            GateError::Chain(ChainError::InvalidRevisionLink { .. })
        ));

        // The failed transaction left nothing behind: p2 does not exist
        // and p1 is still the unobsoleted head.
        assert_eq!(gate.classify(&Did::from("p2")).unwrap(), IdClass::Unused);
        let p1 = gate.get(&Did::from("p1"), &auth).unwrap();
        assert_eq!(p1.obsoleted_by, None);
        assert_eq!(gate.resolve(&Did::from("s1")).unwrap(), Did::from("p1"));
    }

    // ---- Test 17: A sid naming an existing object is rejected ----
    #[test]
    fn sid_naming_existing_object_fails() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();
        let mut m = meta("p2");
        m.series_id = Some(Did::from("p1"));
        let err = gate.create(&m, "loc", &owner()).unwrap_err();
        assert!(matches!(err, GateError::InvalidRequest(_)));
    }

    // ---- Test 18: Reads enforce the access policy ----
    #[test]
    fn get_enforces_read_access() {
        let gate = gate();
        gate.create(&meta("p1"), "loc", &owner()).unwrap();

        let err = gate
            .get(&Did::from("p1"), &AuthContext::public())
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::Access(AccessError::NotAuthorized { .. })
        ));
        // A trusted subject bypasses per-object rules.
        let admin = AuthContext::authenticated(ADMIN);
        assert!(gate.get(&Did::from("p1"), &admin).is_ok());
    }

    // ---- Test 19: Malformed identifiers never reach the store ----
    #[test]
    fn malformed_pid_is_rejected_up_front() {
        let gate = gate();
        let err = gate.create(&meta("has space"), "loc", &owner()).unwrap_err();
        assert!(matches!(err, GateError::InvalidRequest(_)));
    }

    // ---- Test 20: resolve of an unknown sid fails ----
    #[test]
    fn resolve_unknown_sid_fails() {
        let gate = gate();
        let err = gate.resolve(&Did::from("nope")).unwrap_err();
        assert_eq!(
            err,
            GateError::Chain(ChainError::Store(StoreError::UnknownIdentifier(
                Did::from("nope")
            )))
        );
    }
}
