use crate::repr::node::NodeId;

pub mod all_app;
pub mod apply;
pub mod lru_app;

pub use self::all_app::AllApplyTable;
pub use self::apply::Apply;
pub use self::lru_app::LruApplyTable;

/// An apply cache: memoizes the results of binary semiring operations on
/// diagram pairs. Keys carry canonical ids, so a hit is always sound.
pub trait ApplyTable {
    fn hash(&self, op: &Apply) -> u64;
    fn insert(&mut self, op: Apply, res: NodeId, hash: u64);
    fn get(&self, op: Apply, hash: u64) -> Option<NodeId>;
    /// forget everything; required when the node store resets ids
    fn clear(&mut self);
}
