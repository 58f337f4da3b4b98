//! Chain mutation and resolution algorithms.
//!
//! Every function operates on a [`StoreTxn`] owned by the caller; the
//! caller decides the transaction boundary. A mutation that touches more
//! than one record (`link`, `cut`, a merge) must therefore run inside a
//! single transaction so that partial application is never observable.

use std::collections::HashSet;

use tracing::{debug, error};

use mnode_store::{StoreError, StoreTxn};
use mnode_types::{Chain, ChainId, Did, ObjectRecord};

use crate::error::{ChainError, ChainResult};

/// Hard cap on any chain traversal. A chain longer than this is treated
/// as corrupt rather than walked further.
const MAX_CHAIN_WALK: usize = 4096;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether the record is the head of its chain: it replaces a
/// predecessor and nothing replaces it.
pub fn is_head(record: &ObjectRecord) -> bool {
    record.obsoletes.is_some() && record.obsoleted_by.is_none()
}

/// Whether the record is the tail of its chain: something replaces it
/// and it replaces nothing.
pub fn is_tail(record: &ObjectRecord) -> bool {
    record.obsoleted_by.is_some() && record.obsoletes.is_none()
}

/// Whether the record carries any revision link at all.
pub fn is_in_chain(record: &ObjectRecord) -> bool {
    record.has_revision_links()
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// Attach `pid` to the chain graph.
///
/// Called whenever revision-link fields are supplied on create() or
/// update(). The record for `pid` must already exist in the same
/// transaction. Supplied neighbors that do not exist yet are registered
/// as placeholders so replicas can arrive in any order.
///
/// If the neighbors resolve to two different chains, the call bridges
/// two previously separate fragments and they are merged. A supplied
/// `sid` binds the target chain unless the chain already carries a
/// different one, which fails with `InvalidRevisionLink`.
///
/// Returns the surrogate id of the chain `pid` now belongs to.
pub fn link(
    txn: &mut dyn StoreTxn,
    pid: &Did,
    sid: Option<&Did>,
    obsoletes: Option<&Did>,
    obsoleted_by: Option<&Did>,
) -> ChainResult<ChainId> {
    let mut record = txn.record(pid)?;

    if obsoletes == Some(pid) || obsoleted_by == Some(pid) {
        return Err(ChainError::invalid(pid, "revision link references itself"));
    }
    if obsoletes.is_some() && obsoletes == obsoleted_by {
        return Err(ChainError::invalid(
            pid,
            "obsoletes and obsoletedBy name the same object",
        ));
    }
    if sid == Some(pid) {
        return Err(ChainError::invalid(pid, "series id equals the pid"));
    }

    // Write the links onto our record and the reciprocal back-references
    // onto existing neighbors. Dangling neighbors are registered so that
    // the identifier namespace knows about the expected revision.
    if let Some(o) = obsoletes {
        txn.register_if_new(o);
        record.obsoletes = Some(o.clone());
        if let Some(mut neighbor) = txn.maybe_record(o) {
            match &neighbor.obsoleted_by {
                Some(existing) if existing != pid => {
                    return Err(ChainError::invalid(
                        pid,
                        format!("{o} is already obsoleted by {existing}"),
                    ));
                }
                _ => {
                    neighbor.obsoleted_by = Some(pid.clone());
                    txn.put_record(neighbor)?;
                }
            }
        }
    }
    if let Some(o) = obsoleted_by {
        txn.register_if_new(o);
        record.obsoleted_by = Some(o.clone());
        if let Some(mut neighbor) = txn.maybe_record(o) {
            match &neighbor.obsoletes {
                Some(existing) if existing != pid => {
                    return Err(ChainError::invalid(
                        pid,
                        format!("{o} already obsoletes {existing}"),
                    ));
                }
                _ => {
                    neighbor.obsoletes = Some(pid.clone());
                    txn.put_record(neighbor)?;
                }
            }
        }
    }
    txn.put_record(record)?;

    // A cycle can only be introduced through the links written above, so
    // it necessarily passes through `pid` and the forward walk finds it.
    if let Err(fault) = walk_to_head(txn, pid) {
        return match fault {
            Walk::Revisited(node) if node == *pid => {
                Err(ChainError::invalid(pid, "revision links form a cycle"))
            }
            other => Err(other.into_fault(pid)),
        };
    }

    // Resolve every chain the link touches: the pid's own (when
    // re-linking, e.g. a late SID bind), and both neighbors'. Distinct
    // chains are fragments of the same logical chain and are merged.
    let mut target: Option<ChainId> = None;
    let candidates = [
        txn.chain_of(pid),
        obsoletes.and_then(|o| txn.chain_of(o)),
        obsoleted_by.and_then(|o| txn.chain_of(o)),
    ];
    for candidate in candidates.into_iter().flatten() {
        target = Some(match target {
            None => candidate,
            Some(current) if current == candidate => current,
            Some(current) => merge(txn, current, candidate)?,
        });
    }

    // A sid already bound to some chain selects that chain when the
    // neighbors resolved nothing (out-of-order arrival); if the
    // neighbors resolved a *different* chain the sid cannot move there.
    if let Some(s) = sid {
        if let Some(bound) = txn.chain_by_sid(s) {
            match target {
                None => target = Some(bound),
                Some(t) if t != bound => {
                    return Err(ChainError::invalid(
                        pid,
                        format!("series id {s} is bound to another chain"),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    let chain_id = match target {
        Some(id) => {
            if let Some(s) = sid {
                bind_sid(txn, id, s, pid)?;
            }
            id
        }
        None => {
            let mut chain = Chain::standalone(pid.clone());
            if let Some(s) = sid {
                txn.register_if_new(s);
                chain.sid = Some(s.clone());
            }
            let id = chain.id;
            txn.insert_chain(chain)?;
            debug!(pid = %pid, chain = %id, "created standalone chain");
            id
        }
    };

    txn.set_membership(pid, chain_id);
    recompute_head(txn, chain_id, pid)?;
    Ok(chain_id)
}

/// Bind `sid` to an existing chain, failing if the chain already
/// carries a different one. SIDs are permanently bound once set.
fn bind_sid(txn: &mut dyn StoreTxn, chain_id: ChainId, sid: &Did, pid: &Did) -> ChainResult<()> {
    let mut chain = txn.chain(chain_id)?;
    match &chain.sid {
        Some(existing) if existing != sid => Err(ChainError::invalid(
            pid,
            format!("chain is bound to series id {existing}, cannot bind {sid}"),
        )),
        Some(_) => Ok(()),
        None => {
            txn.register_if_new(sid);
            chain.sid = Some(sid.clone());
            txn.update_chain(chain)?;
            debug!(chain = %chain_id, sid = %sid, "bound series id");
            Ok(())
        }
    }
}

/// Merge two chain fragments, keeping `keep` as the surviving surrogate.
///
/// All membership rows of `drop` are re-pointed at `keep`; the dropped
/// fragment's sid is carried over only when the survivor has none. Both
/// fragments carrying different sids means a prior write corrupted the
/// store, surfaced as an internal fault rather than a validation error.
fn merge(txn: &mut dyn StoreTxn, keep: ChainId, drop: ChainId) -> ChainResult<ChainId> {
    let mut survivor = txn.chain(keep)?;
    let mut discarded = txn.chain(drop)?;

    match (&survivor.sid, &discarded.sid) {
        (Some(a), Some(b)) if a != b => {
            error!(
                keep = %keep, drop = %drop, survivor_sid = %a, discarded_sid = %b,
                "merge candidates carry conflicting series ids"
            );
            return Err(ChainError::InternalFault(format!(
                "cannot merge chains {keep} and {drop}: both carry series ids ({a}, {b})"
            )));
        }
        (None, Some(b)) => {
            survivor.sid = Some(b.clone());
        }
        _ => {}
    }

    for member in txn.members(drop) {
        txn.set_membership(&member, keep);
    }

    // Clear the sid before deletion so the cascade cannot release an
    // identifier that just moved to the survivor.
    discarded.sid = None;
    txn.update_chain(discarded)?;
    txn.delete_chain(drop)?;
    txn.update_chain(survivor)?;

    debug!(keep = %keep, drop = %drop, "merged chain fragments");
    Ok(keep)
}

// ---------------------------------------------------------------------------
// Cut
// ---------------------------------------------------------------------------

/// Remove `pid` from anywhere in its chain.
///
/// The record keeps existing but loses both revision links and becomes
/// the sole member of a fresh standalone chain. Adjacent members are
/// rewritten to close the gap. The prior chain's sid stays with the
/// remaining chain and re-resolves to its recomputed head; when `pid`
/// was the last member, the prior chain is deleted and its sid released.
///
/// Cutting a record that carries no revision links is a no-op.
pub fn cut(txn: &mut dyn StoreTxn, pid: &Did) -> ChainResult<()> {
    let mut record = txn.record(pid)?;
    if !is_in_chain(&record) {
        return Ok(());
    }
    let old_chain = txn.chain_of(pid).ok_or_else(|| {
        error!(pid = %pid, "record has revision links but no chain membership");
        ChainError::InternalFault(format!("{pid} has revision links but no membership row"))
    })?;

    // Neighbors that actually exist; dangling links need no rewrite.
    let prev = record
        .obsoletes
        .as_ref()
        .and_then(|o| txn.maybe_record(o));
    let next = record
        .obsoleted_by
        .as_ref()
        .and_then(|o| txn.maybe_record(o));

    let anchor = match (prev, next) {
        // Embedded: close the gap between predecessor and successor.
        (Some(mut p), Some(mut n)) => {
            p.obsoleted_by = Some(n.pid.clone());
            n.obsoletes = Some(p.pid.clone());
            let anchor = n.pid.clone();
            txn.put_record(p)?;
            txn.put_record(n)?;
            Some(anchor)
        }
        // Head: the predecessor loses its forward pointer.
        (Some(mut p), None) => {
            p.obsoleted_by = None;
            let anchor = p.pid.clone();
            txn.put_record(p)?;
            Some(anchor)
        }
        // Tail: the successor loses its backward pointer.
        (None, Some(mut n)) => {
            n.obsoletes = None;
            let anchor = n.pid.clone();
            txn.put_record(n)?;
            Some(anchor)
        }
        // Only dangling links: no existing neighbor remains.
        (None, None) => None,
    };

    record.obsoletes = None;
    record.obsoleted_by = None;
    txn.put_record(record)?;

    let standalone = Chain::standalone(pid.clone());
    let standalone_id = standalone.id;
    txn.insert_chain(standalone)?;
    txn.set_membership(pid, standalone_id);
    debug!(pid = %pid, from = %old_chain, to = %standalone_id, "cut record from chain");

    match anchor {
        Some(remaining) => recompute_head(txn, old_chain, &remaining)?,
        // `pid` was the last existing member; the chain dies with it and
        // the cascade releases any bound sid.
        None => txn.delete_chain(old_chain)?,
    }
    Ok(())
}

/// Delete `pid` entirely: cut it from its chain, drop its record and
/// membership, and delete its now-empty standalone chain.
///
/// Returns the removed record for the caller (event logging, replica
/// invalidation). The pid registration is released unless another
/// record still references it.
pub fn remove(txn: &mut dyn StoreTxn, pid: &Did) -> ChainResult<ObjectRecord> {
    cut(txn, pid)?;
    let chain_id = txn.chain_of(pid).ok_or_else(|| {
        ChainError::InternalFault(format!("{pid} lost its membership row during cut"))
    })?;
    let record = txn.remove_record(pid)?;
    txn.remove_membership(pid);
    txn.delete_chain(chain_id)?;
    debug!(pid = %pid, "removed record and its standalone chain");
    Ok(record)
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// The PID the sid currently resolves to: the bound chain's head.
pub fn resolve(txn: &dyn StoreTxn, sid: &Did) -> ChainResult<Did> {
    let chain_id = txn
        .chain_by_sid(sid)
        .ok_or_else(|| StoreError::UnknownIdentifier(sid.clone()))?;
    Ok(txn.chain(chain_id)?.head_pid)
}

/// The sid of the chain `pid` belongs to, if any. Valid for any member,
/// not only the head.
pub fn sid_of(txn: &dyn StoreTxn, pid: &Did) -> ChainResult<Option<Did>> {
    // The record must exist; membership alone is not enough to tell a
    // pid from a stale identifier.
    txn.record(pid)?;
    match txn.chain_of(pid) {
        Some(chain_id) => Ok(txn.chain(chain_id)?.sid),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Head recomputation
// ---------------------------------------------------------------------------

/// Failure modes of a bounded forward walk.
enum Walk {
    /// The walk returned to a node it had already seen.
    Revisited(Did),
    /// The walk exceeded the hard cap.
    Exhausted(Did),
}

impl Walk {
    fn into_fault(self, context: &Did) -> ChainError {
        let msg = match self {
            Walk::Revisited(node) => {
                format!("cycle through {node} while walking chain of {context}")
            }
            Walk::Exhausted(node) => format!(
                "chain of {context} exceeds {MAX_CHAIN_WALK} members at {node}"
            ),
        };
        error!(pid = %context, "{msg}");
        ChainError::InternalFault(msg)
    }
}

/// Walk forward via `obsoleted_by` from `start` until the newest
/// *existing* object. A dangling forward pointer ends the walk at the
/// last existing record.
fn walk_to_head(txn: &dyn StoreTxn, start: &Did) -> Result<Did, Walk> {
    let mut visited: HashSet<Did> = HashSet::new();
    let mut current = start.clone();
    visited.insert(current.clone());

    for _ in 0..MAX_CHAIN_WALK {
        let next = match txn.maybe_record(&current).and_then(|r| r.obsoleted_by) {
            Some(next) => next,
            None => return Ok(current),
        };
        match txn.maybe_record(&next) {
            Some(_) => {
                if !visited.insert(next.clone()) {
                    return Err(Walk::Revisited(next));
                }
                current = next;
            }
            // Dangling: the successor has not arrived yet.
            None => return Ok(current),
        }
    }
    Err(Walk::Exhausted(current))
}

/// Recompute a chain's head from any existing member.
///
/// The head is never trusted from a stale value because replicas arrive
/// in any order; it is always re-derived from the revision links.
fn recompute_head(txn: &mut dyn StoreTxn, chain_id: ChainId, member: &Did) -> ChainResult<()> {
    let head = walk_to_head(txn, member).map_err(|w| w.into_fault(member))?;
    let mut chain = txn.chain(chain_id)?;
    if chain.head_pid != head {
        debug!(chain = %chain_id, head = %head, "recomputed chain head");
        chain.head_pid = head;
        txn.update_chain(chain)?;
    }
    Ok(())
}
