//! Revision chain manager for the mnode metadata core.
//!
//! A *chain* is the ordered sequence of revisions of one logical
//! dataset, linked pairwise through `obsoletes` / `obsoleted_by`
//! pointers. This crate maintains chain membership, recomputes the head
//! pointer after every mutation, merges chain fragments that later prove
//! connected, and cuts members back out — all against the table seam of
//! `mnode-store`, inside a transaction owned by the caller.
//!
//! The hard cases this crate exists for:
//!
//! - revision links may name objects that have not arrived yet
//!   (out-of-order replica backfill), so the head is always the newest
//!   *existing* member, never the newest named one;
//! - an arriving object can bridge two previously separate fragments,
//!   which must then merge without ever violating SID uniqueness;
//! - every traversal is bounded and visited-set guarded, so corrupted
//!   cyclic data fails fast instead of looping.

pub mod error;
pub mod manager;

pub use error::{ChainError, ChainResult};
pub use manager::{cut, is_head, is_in_chain, is_tail, link, remove, resolve, sid_of};
