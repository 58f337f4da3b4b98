use mnode_types::{Chain, ChainId, Did, IdClass, ObjectRecord};

use crate::error::StoreResult;

/// The table operations available inside one transaction.
///
/// All implementations must satisfy these invariants:
/// - Identifier registration is idempotent and identifiers are never
///   removed while anything references them.
/// - Classification is derived from current table contents, never
///   stored: a placeholder becomes a PID when its record arrives.
/// - Records are keyed by PID; inserting over an existing record is
///   rejected, never silently overwritten.
/// - Membership maps every record's PID to exactly one chain.
/// - Mutations are only visible to other transactions after commit.
pub trait StoreTxn {
    // ---- Identifier namespace ----

    /// Register an identifier if it is not already registered.
    ///
    /// Idempotent get-or-create: returns `true` only when the identifier
    /// was newly registered. Concurrent first-use races are absorbed by
    /// the transaction boundary.
    fn register_if_new(&mut self, did: &Did) -> bool;

    /// Whether the identifier is registered at all.
    fn identifier_exists(&self, did: &Did) -> bool;

    /// Classify an identifier against the current table contents.
    fn classify(&self, did: &Did) -> IdClass;

    /// Drop an identifier registration.
    ///
    /// Only valid as a cascade step (chain deletion releasing its SID,
    /// object deletion releasing its PID). Never exposed to callers as
    /// a standalone operation.
    fn unregister(&mut self, did: &Did);

    // ---- Object records ----

    /// Insert a new record, registering its PID.
    ///
    /// Fails with `IdentifierAlreadyInUse` if a record already exists
    /// under the PID.
    fn insert_record(&mut self, record: ObjectRecord) -> StoreResult<()>;

    /// Fetch a record, failing with `UnknownIdentifier` if absent.
    fn record(&self, pid: &Did) -> StoreResult<ObjectRecord>;

    /// Fetch a record if it exists.
    fn maybe_record(&self, pid: &Did) -> Option<ObjectRecord>;

    /// Rewrite an existing record in place.
    ///
    /// Used by the chain manager to rewrite revision back-references and
    /// by the validator for mutable-field updates. Identity fields are
    /// the caller's responsibility; the store does not diff them.
    fn put_record(&mut self, record: ObjectRecord) -> StoreResult<()>;

    /// Remove a record, returning it. The PID registration is dropped
    /// only if no other record still references the PID.
    fn remove_record(&mut self, pid: &Did) -> StoreResult<ObjectRecord>;

    /// Number of stored records.
    fn record_count(&self) -> usize;

    // ---- Chains and membership ----

    /// Insert a new chain.
    fn insert_chain(&mut self, chain: Chain) -> StoreResult<()>;

    /// Fetch a chain, failing with `UnknownChain` if absent.
    fn chain(&self, id: ChainId) -> StoreResult<Chain>;

    /// Rewrite an existing chain (head or SID binding).
    fn update_chain(&mut self, chain: Chain) -> StoreResult<()>;

    /// Delete a chain, cascading removal of its SID registration.
    ///
    /// Fails with `ChainNotEmpty` if any membership row still points at
    /// the chain.
    fn delete_chain(&mut self, id: ChainId) -> StoreResult<()>;

    /// The chain a PID currently belongs to, if any.
    fn chain_of(&self, pid: &Did) -> Option<ChainId>;

    /// The chain a SID is bound to, if any.
    fn chain_by_sid(&self, sid: &Did) -> Option<ChainId>;

    /// Point a PID's membership at a chain (insert or re-point).
    fn set_membership(&mut self, pid: &Did, chain: ChainId);

    /// Drop a PID's membership row.
    fn remove_membership(&mut self, pid: &Did);

    /// All member PIDs of a chain, in unspecified order.
    fn members(&self, chain: ChainId) -> Vec<Did>;

    /// Number of chains.
    fn chain_count(&self) -> usize;
}
