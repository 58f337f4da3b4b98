//! Transactional backing store for the mnode metadata core.
//!
//! Three concerns live behind one table-level seam:
//!
//! - the **identifier namespace** (registration and dynamic
//!   classification of identifier strings),
//! - the **object record store** (per-version records keyed by PID),
//! - the **chain tables** (chains, membership, SID bindings).
//!
//! [`StoreTxn`] is the seam: every table operation the chain manager and
//! the validator need, expressed over trait objects so callers never
//! depend on a concrete backend. [`InMemoryStore`] is the in-memory
//! implementation; its [`transaction`] method is the sole serialization
//! mechanism — mutations run against a private copy of the tables and
//! become visible only when the closure succeeds.
//!
//! [`transaction`]: InMemoryStore::transaction

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryStore, Tables};
pub use traits::StoreTxn;
