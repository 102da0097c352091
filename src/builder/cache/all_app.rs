//! Apply cache that stores every application it has ever seen
use rustc_hash::FxHashMap;

use super::{Apply, ApplyTable};
use crate::repr::node::NodeId;

/// The top-level data structure that caches applications
pub struct AllApplyTable {
    table: FxHashMap<Apply, NodeId>,
}

impl ApplyTable for AllApplyTable {
    fn hash(&self, _op: &Apply) -> u64 {
        // do nothing; the all-cache hashes internally
        0
    }

    fn insert(&mut self, op: Apply, res: NodeId, _hash: u64) {
        self.table.insert(op, res);
    }

    fn get(&self, op: Apply, _hash: u64) -> Option<NodeId> {
        self.table.get(&op).copied()
    }

    fn clear(&mut self) {
        self.table.clear();
    }
}

impl AllApplyTable {
    pub fn new() -> AllApplyTable {
        AllApplyTable {
            table: FxHashMap::default(),
        }
    }
}

impl Default for AllApplyTable {
    fn default() -> Self {
        Self::new()
    }
}
