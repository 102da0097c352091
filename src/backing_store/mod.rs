//! Backing stores are unique tables which support a `get_or_insert`
//! operation returning a stable integer id per distinct value.
pub mod intern_table;

pub use self::intern_table::InternTable;

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use thiserror::Error;

/// Errors surfaced by the checked reverse-lookup path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The id was never issued, or the store was cleared since it was.
    #[error("stale node id {0}: not present in the store")]
    StaleNodeId(usize),
}

/// Computes the 64-bit hash a table indexes a value under. Kept separate
/// from `std::hash::Hash` so stores can precompute and cache hashes, and so
/// the node store can plug in its parity scheme.
pub trait NodeHasher<T> {
    fn u64hash(&self, elem: &T) -> u64;
}

/// Hashes the whole value with `FxHasher`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNodeHasher {}

impl<T: Hash> NodeHasher<T> for DefaultNodeHasher {
    fn u64hash(&self, elem: &T) -> u64 {
        let mut hasher = FxHasher::default();
        elem.hash(&mut hasher);
        hasher.finish()
    }
}
