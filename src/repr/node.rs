//! The core decision-diagram node representation and its identifier type
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::backing_store::NodeHasher;

/// An identifier for an interned node.
///
/// Ids are handed out by the node store in increasing order starting from 0;
/// because the store interns structurally, id equality is the canonical
/// equality on diagrams.
/// ```
/// use ladd::repr::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.value_usize(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn new(v: usize) -> NodeId {
        assert!(v < u32::MAX as usize, "node id overflow");
        NodeId(v as u32)
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn value_usize(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single diagram node: either a constant leaf or a guarded branch.
///
/// A branch reads "if the value assigned to `var` is contained in `guard`,
/// continue at `hi`, else continue at `lo`". Children are ids into the same
/// store, so subtree equality is id equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node<V, L, R> {
    Leaf(R),
    Branch { var: V, guard: L, hi: NodeId, lo: NodeId },
}

impl<V, L, R> Node<V, L, R> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The `(var, guard)` key of a branch, or `None` for a leaf.
    pub fn key(&self) -> Option<(&V, &L)> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch { var, guard, .. } => Some((var, guard)),
        }
    }
}

fn field_hash<T: Hash>(t: &T) -> u64 {
    let mut hasher = FxHasher::default();
    t.hash(&mut hasher);
    hasher.finish()
}

/// The hasher the node store indexes with.
///
/// Leaf hashes are forced even and branch hashes odd, so the variant tag
/// never collides across the two kinds. Branch fields are mixed with fixed
/// prime multipliers; child ids participate directly since they are already
/// canonical.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParityNodeHasher;

impl<V: Hash, L: Hash, R: Hash> NodeHasher<Node<V, L, R>> for ParityNodeHasher {
    fn u64hash(&self, node: &Node<V, L, R>) -> u64 {
        match node {
            Node::Leaf(r) => field_hash(r) << 1,
            Node::Branch { var, guard, hi, lo } => 1021u64
                .wrapping_mul(field_hash(var))
                .wrapping_add(1031u64.wrapping_mul(field_hash(guard)))
                .wrapping_add(1033u64.wrapping_mul(hi.value() as u64))
                .wrapping_add(1039u64.wrapping_mul(lo.value() as u64))
                | 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_separates_variants() {
        let h = ParityNodeHasher;
        let leaf: Node<u64, bool, u64> = Node::Leaf(12);
        let branch: Node<u64, bool, u64> = Node::Branch {
            var: 0,
            guard: true,
            hi: NodeId::new(0),
            lo: NodeId::new(1),
        };
        assert_eq!(h.u64hash(&leaf) & 1, 0);
        assert_eq!(h.u64hash(&branch) & 1, 1);
    }

    #[test]
    fn branch_hash_depends_on_children() {
        let h = ParityNodeHasher;
        let b1: Node<u64, bool, u64> = Node::Branch {
            var: 0,
            guard: true,
            hi: NodeId::new(0),
            lo: NodeId::new(1),
        };
        let b2: Node<u64, bool, u64> = Node::Branch {
            var: 0,
            guard: true,
            hi: NodeId::new(1),
            lo: NodeId::new(0),
        };
        assert_ne!(h.u64hash(&b1), h.u64hash(&b2));
    }
}
