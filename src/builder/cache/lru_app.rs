//! A lossy direct-mapped apply cache that grows past a load threshold
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::{Apply, ApplyTable};
use crate::repr::node::NodeId;

const INITIAL_CAPACITY: usize = 16; // given as a power of two

// if the table is GROW_RATIO% full, it will double in size on insertion
const GROW_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    key: Apply,
    res: NodeId,
    hash: u64,
}

/// A fixed-slot cache: a colliding insertion simply evicts the previous
/// occupant. Cheap, bounded, and sound because hits re-check the key.
pub struct LruApplyTable {
    tbl: Vec<Option<Slot>>,
    cap: usize, // a particular power of 2
    num_filled: usize,
}

impl LruApplyTable {
    pub fn new(cap: usize) -> LruApplyTable {
        LruApplyTable {
            tbl: vec![None; 1 << cap],
            cap,
            num_filled: 0,
        }
    }

    #[inline]
    fn pos(&self, hash: u64) -> usize {
        (hash as usize) % (1 << self.cap)
    }

    /// grow the table to accommodate more elements
    fn grow(&mut self) {
        let mut grown = LruApplyTable::new(self.cap + 1);
        for slot in self.tbl.iter().flatten() {
            grown.insert(slot.key, slot.res, slot.hash);
        }
        self.tbl = grown.tbl;
        self.cap = grown.cap;
        self.num_filled = grown.num_filled;
    }
}

impl ApplyTable for LruApplyTable {
    fn hash(&self, op: &Apply) -> u64 {
        let mut hasher: FxHasher = Default::default();
        op.hash(&mut hasher);
        hasher.finish()
    }

    fn insert(&mut self, op: Apply, res: NodeId, hash: u64) {
        if (self.num_filled as f64 / (1 << self.cap) as f64) > GROW_RATIO {
            self.grow();
        }
        let pos = self.pos(hash);
        if self.tbl[pos].is_none() {
            self.num_filled += 1;
        }
        self.tbl[pos] = Some(Slot {
            key: op,
            res,
            hash,
        });
    }

    fn get(&self, op: Apply, hash: u64) -> Option<NodeId> {
        let pos = self.pos(hash);
        match &self.tbl[pos] {
            Some(slot) if slot.key == op => Some(slot.res),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.tbl = vec![None; 1 << INITIAL_CAPACITY];
        self.cap = INITIAL_CAPACITY;
        self.num_filled = 0;
    }
}

impl Default for LruApplyTable {
    fn default() -> Self {
        Self::new(INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut t = LruApplyTable::default();
        let op = Apply::sum(NodeId::new(0), NodeId::new(1));
        let hash = t.hash(&op);
        assert_eq!(t.get(op, hash), None);
        t.insert(op, NodeId::new(7), hash);
        assert_eq!(t.get(op, hash), Some(NodeId::new(7)));
    }

    #[test]
    fn survives_growth() {
        let mut t = LruApplyTable::default();
        let ops: Vec<Apply> = (0..100)
            .map(|i| Apply::prod(NodeId::new(i), NodeId::new(i + 1)))
            .collect();
        for (i, op) in ops.iter().enumerate() {
            let hash = t.hash(op);
            t.insert(*op, NodeId::new(i), hash);
        }
        // lossy, but whatever is present must be correct
        for (i, op) in ops.iter().enumerate() {
            let hash = t.hash(op);
            if let Some(res) = t.get(*op, hash) {
                assert_eq!(res, NodeId::new(i));
            }
        }
    }
}
