//! In-memory backing store.
//!
//! [`Tables`] holds the namespace, record, and chain tables as plain
//! `HashMap`s and implements the full [`StoreTxn`] trait.
//! [`InMemoryStore`] wraps the tables in a `RwLock` and provides the
//! transaction boundary: a mutation runs against a private clone and is
//! swapped in atomically only when the closure succeeds, so a failed
//! transaction never leaves partial state behind.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracing::debug;

use mnode_types::{Chain, ChainId, Did, IdClass, ObjectRecord};

use crate::error::{StoreError, StoreResult};
use crate::traits::StoreTxn;

/// The table state: one value per backing-store "database".
#[derive(Clone, Debug, Default)]
pub struct Tables {
    /// Registered identifier strings (the namespace).
    identifiers: HashSet<Did>,
    /// Object records keyed by PID.
    records: HashMap<Did, ObjectRecord>,
    /// Chains keyed by surrogate id.
    chains: HashMap<ChainId, Chain>,
    /// Membership: PID -> owning chain.
    membership: HashMap<Did, ChainId>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any record other than `except` references `did` through a
    /// revision link. Used to decide identifier release on delete.
    fn is_referenced(&self, did: &Did, except: &Did) -> bool {
        self.records.values().any(|r| {
            r.pid != *except
                && (r.obsoletes.as_ref() == Some(did) || r.obsoleted_by.as_ref() == Some(did))
        })
    }
}

impl StoreTxn for Tables {
    // ---- Identifier namespace ----

    fn register_if_new(&mut self, did: &Did) -> bool {
        let inserted = self.identifiers.insert(did.clone());
        if inserted {
            debug!(did = %did, "registered identifier");
        }
        inserted
    }

    fn identifier_exists(&self, did: &Did) -> bool {
        self.identifiers.contains(did)
    }

    fn classify(&self, did: &Did) -> IdClass {
        if !self.identifiers.contains(did) {
            return IdClass::Unused;
        }
        if self.records.contains_key(did) {
            return IdClass::Pid;
        }
        if self.chain_by_sid(did).is_some() {
            return IdClass::Sid;
        }
        IdClass::ReplicaPlaceholder
    }

    fn unregister(&mut self, did: &Did) {
        if self.identifiers.remove(did) {
            debug!(did = %did, "unregistered identifier");
        }
    }

    // ---- Object records ----

    fn insert_record(&mut self, record: ObjectRecord) -> StoreResult<()> {
        if self.records.contains_key(&record.pid) {
            return Err(StoreError::IdentifierAlreadyInUse(record.pid));
        }
        self.register_if_new(&record.pid);
        debug!(pid = %record.pid, "inserted record");
        self.records.insert(record.pid.clone(), record);
        Ok(())
    }

    fn record(&self, pid: &Did) -> StoreResult<ObjectRecord> {
        self.records
            .get(pid)
            .cloned()
            .ok_or_else(|| StoreError::UnknownIdentifier(pid.clone()))
    }

    fn maybe_record(&self, pid: &Did) -> Option<ObjectRecord> {
        self.records.get(pid).cloned()
    }

    fn put_record(&mut self, record: ObjectRecord) -> StoreResult<()> {
        if !self.records.contains_key(&record.pid) {
            return Err(StoreError::UnknownIdentifier(record.pid));
        }
        self.records.insert(record.pid.clone(), record);
        Ok(())
    }

    fn remove_record(&mut self, pid: &Did) -> StoreResult<ObjectRecord> {
        let record = self
            .records
            .remove(pid)
            .ok_or_else(|| StoreError::UnknownIdentifier(pid.clone()))?;
        if !self.is_referenced(pid, pid) {
            self.unregister(pid);
        }
        debug!(pid = %pid, "removed record");
        Ok(record)
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    // ---- Chains and membership ----

    fn insert_chain(&mut self, chain: Chain) -> StoreResult<()> {
        debug!(chain = %chain.id, head = %chain.head_pid, "inserted chain");
        self.chains.insert(chain.id, chain);
        Ok(())
    }

    fn chain(&self, id: ChainId) -> StoreResult<Chain> {
        self.chains
            .get(&id)
            .cloned()
            .ok_or(StoreError::UnknownChain(id))
    }

    fn update_chain(&mut self, chain: Chain) -> StoreResult<()> {
        if !self.chains.contains_key(&chain.id) {
            return Err(StoreError::UnknownChain(chain.id));
        }
        self.chains.insert(chain.id, chain);
        Ok(())
    }

    fn delete_chain(&mut self, id: ChainId) -> StoreResult<()> {
        if self.membership.values().any(|c| *c == id) {
            return Err(StoreError::ChainNotEmpty(id));
        }
        let chain = self.chains.remove(&id).ok_or(StoreError::UnknownChain(id))?;
        if let Some(sid) = chain.sid {
            // Releasing the chain releases its SID registration.
            self.unregister(&sid);
            debug!(chain = %id, sid = %sid, "deleted chain, released sid");
        } else {
            debug!(chain = %id, "deleted chain");
        }
        Ok(())
    }

    fn chain_of(&self, pid: &Did) -> Option<ChainId> {
        self.membership.get(pid).copied()
    }

    fn chain_by_sid(&self, sid: &Did) -> Option<ChainId> {
        self.chains
            .values()
            .find(|c| c.sid.as_ref() == Some(sid))
            .map(|c| c.id)
    }

    fn set_membership(&mut self, pid: &Did, chain: ChainId) {
        self.membership.insert(pid.clone(), chain);
    }

    fn remove_membership(&mut self, pid: &Did) {
        self.membership.remove(pid);
    }

    fn members(&self, chain: ChainId) -> Vec<Did> {
        self.membership
            .iter()
            .filter(|(_, c)| **c == chain)
            .map(|(pid, _)| pid.clone())
            .collect()
    }

    fn chain_count(&self) -> usize {
        self.chains.len()
    }
}

/// An in-memory implementation of the transactional store.
///
/// All tables live behind one `RwLock`. The write lock is the sole
/// serialization mechanism: no other in-process locks exist, matching a
/// backing database where the transaction is the unit of isolation.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` inside a transaction.
    ///
    /// `f` receives a private copy of the tables. On `Ok` the copy is
    /// swapped in atomically; on `Err` it is dropped and the shared state
    /// is untouched. Partial application is therefore impossible.
    ///
    /// Lock poisoning surfaces as [`StoreError::Backend`] converted into
    /// the caller's error type.
    pub fn transaction<T, E>(
        &self,
        f: impl FnOnce(&mut dyn StoreTxn) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self
            .state
            .write()
            .map_err(|e| E::from(StoreError::Backend(format!("lock poisoned: {e}"))))?;
        let mut working = guard.clone();
        let out = f(&mut working)?;
        *guard = working;
        Ok(out)
    }

    /// Run a read-only closure against the committed tables.
    pub fn read<T>(&self, f: impl FnOnce(&dyn StoreTxn) -> T) -> StoreResult<T> {
        let guard = self
            .state
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(f(&*guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use mnode_types::{Checksum, ReplicationPolicy};

    fn test_record(pid: &str) -> ObjectRecord {
        ObjectRecord {
            pid: Did::from(pid),
            format_id: "text/csv".to_string(),
            checksum: Checksum::new("SHA-1", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            size: 1024,
            submitter: "cn=submitter,dc=example".to_string(),
            rights_holder: "cn=owner,dc=example".to_string(),
            origin_node: "urn:node:origin".to_string(),
            authoritative_node: "urn:node:origin".to_string(),
            obsoletes: None,
            obsoleted_by: None,
            archived: false,
            uploaded_at: Utc::now(),
            modified_at: Utc::now(),
            storage_locator: format!("file:///objects/{pid}"),
            access_rules: Vec::new(),
            replication_policy: ReplicationPolicy::default(),
            replicas: Vec::new(),
        }
    }

    // ---- Test 1: Identifier registration is idempotent ----
    #[test]
    fn register_if_new_is_idempotent() {
        let mut tables = Tables::new();
        let did = Did::from("p1");
        assert!(tables.register_if_new(&did));
        assert!(!tables.register_if_new(&did));
        assert!(tables.identifier_exists(&did));
    }

    // ---- Test 2: Classification follows table contents ----
    #[test]
    fn classify_tracks_table_contents() {
        let mut tables = Tables::new();
        let pid = Did::from("p1");
        let sid = Did::from("s1");
        let placeholder = Did::from("p2");

        assert_eq!(tables.classify(&pid), IdClass::Unused);

        tables.insert_record(test_record("p1")).unwrap();
        assert_eq!(tables.classify(&pid), IdClass::Pid);

        let mut chain = Chain::standalone(pid.clone());
        chain.sid = Some(sid.clone());
        tables.register_if_new(&sid);
        tables.insert_chain(chain).unwrap();
        assert_eq!(tables.classify(&sid), IdClass::Sid);

        // Registered but no record and not a sid: placeholder.
        tables.register_if_new(&placeholder);
        assert_eq!(tables.classify(&placeholder), IdClass::ReplicaPlaceholder);
    }

    // ---- Test 3: Duplicate insert is rejected ----
    #[test]
    fn insert_duplicate_record_fails() {
        let mut tables = Tables::new();
        tables.insert_record(test_record("p1")).unwrap();
        let err = tables.insert_record(test_record("p1")).unwrap_err();
        assert_eq!(err, StoreError::IdentifierAlreadyInUse(Did::from("p1")));
    }

    // ---- Test 4: A placeholder can be filled by a record ----
    #[test]
    fn placeholder_registration_does_not_block_insert() {
        let mut tables = Tables::new();
        let pid = Did::from("p1");
        tables.register_if_new(&pid);
        assert_eq!(tables.classify(&pid), IdClass::ReplicaPlaceholder);

        tables.insert_record(test_record("p1")).unwrap();
        assert_eq!(tables.classify(&pid), IdClass::Pid);
    }

    // ---- Test 5: Chain deletion releases the sid ----
    #[test]
    fn delete_chain_releases_sid() {
        let mut tables = Tables::new();
        let sid = Did::from("s1");
        let mut chain = Chain::standalone(Did::from("p1"));
        chain.sid = Some(sid.clone());
        let chain_id = chain.id;
        tables.register_if_new(&sid);
        tables.insert_chain(chain).unwrap();

        tables.delete_chain(chain_id).unwrap();
        assert!(!tables.identifier_exists(&sid));
        assert_eq!(tables.classify(&sid), IdClass::Unused);
    }

    // ---- Test 6: Chain deletion with members is rejected ----
    #[test]
    fn delete_chain_with_members_fails() {
        let mut tables = Tables::new();
        let chain = Chain::standalone(Did::from("p1"));
        let chain_id = chain.id;
        tables.insert_chain(chain).unwrap();
        tables.set_membership(&Did::from("p1"), chain_id);

        let err = tables.delete_chain(chain_id).unwrap_err();
        assert_eq!(err, StoreError::ChainNotEmpty(chain_id));
    }

    // ---- Test 7: remove_record keeps referenced identifiers ----
    #[test]
    fn remove_record_keeps_referenced_identifier() {
        let mut tables = Tables::new();
        tables.insert_record(test_record("p1")).unwrap();
        let mut successor = test_record("p2");
        successor.obsoletes = Some(Did::from("p1"));
        tables.insert_record(successor).unwrap();

        tables.remove_record(&Did::from("p1")).unwrap();
        // p2 still points at p1, so the identifier stays registered.
        assert!(tables.identifier_exists(&Did::from("p1")));
        assert_eq!(tables.classify(&Did::from("p1")), IdClass::ReplicaPlaceholder);
    }

    // ---- Test 8: Transactions are all-or-nothing ----
    #[test]
    fn failed_transaction_leaves_no_trace() {
        let store = InMemoryStore::new();

        let result: Result<(), StoreError> = store.transaction(|txn| {
            txn.insert_record(test_record("p1"))?;
            Err(StoreError::Backend("forced abort".to_string()))
        });
        assert!(result.is_err());

        let count = store.read(|txn| txn.record_count()).unwrap();
        assert_eq!(count, 0);
        let class = store.read(|txn| txn.classify(&Did::from("p1"))).unwrap();
        assert_eq!(class, IdClass::Unused);
    }

    // ---- Test 9: Committed transactions are visible ----
    #[test]
    fn committed_transaction_is_visible() {
        let store = InMemoryStore::new();
        store
            .transaction(|txn| txn.insert_record(test_record("p1")))
            .unwrap();
        let found = store
            .read(|txn| txn.maybe_record(&Did::from("p1")).is_some())
            .unwrap();
        assert!(found);
    }

    // ---- Test 10: Membership bookkeeping ----
    #[test]
    fn membership_is_per_pid() {
        let mut tables = Tables::new();
        let chain_a = Chain::standalone(Did::from("p1"));
        let chain_b = Chain::standalone(Did::from("p2"));
        let (a, b) = (chain_a.id, chain_b.id);
        tables.insert_chain(chain_a).unwrap();
        tables.insert_chain(chain_b).unwrap();

        tables.set_membership(&Did::from("p1"), a);
        tables.set_membership(&Did::from("p2"), b);
        assert_eq!(tables.chain_of(&Did::from("p1")), Some(a));
        assert_eq!(tables.members(a), vec![Did::from("p1")]);

        // Re-pointing replaces, never duplicates.
        tables.set_membership(&Did::from("p1"), b);
        assert!(tables.members(a).is_empty());
        assert_eq!(tables.members(b).len(), 2);
    }

    // ---- Test 11: unregister releases an identifier ----
    #[test]
    fn unregister_releases_identifier() {
        let mut tables = Tables::new();
        let did = Did::from("p1");
        tables.register_if_new(&did);
        assert_eq!(tables.classify(&did), IdClass::ReplicaPlaceholder);

        tables.unregister(&did);
        assert!(!tables.identifier_exists(&did));
        assert_eq!(tables.classify(&did), IdClass::Unused);
        // Unregistering an unknown identifier is a no-op.
        tables.unregister(&did);
    }
}
