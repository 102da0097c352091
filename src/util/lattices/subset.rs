use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use bit_set::BitSet;

use super::lattice_traits::Lattice;

/// Finite sets over a small universe of small naturals, backed by a bit
/// set. Here every meet and join is representable, so the `tight` flag
/// never forces a `None`; only an empty intersection does.
#[derive(Debug, Clone)]
pub struct Subset {
    b: BitSet,
}

impl Subset {
    pub fn new() -> Subset {
        Subset { b: BitSet::new() }
    }

    pub fn from_elems(elems: &[usize]) -> Subset {
        let mut s = Subset::new();
        for &e in elems {
            s.insert(e);
        }
        s
    }

    pub fn insert(&mut self, elem: usize) {
        self.b.insert(elem);
    }

    pub fn contains(&self, elem: usize) -> bool {
        self.b.contains(elem)
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.b.iter()
    }
}

impl Default for Subset {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Subset {
    fn eq(&self, other: &Self) -> bool {
        self.b == other.b
    }
}

impl Eq for Subset {}

impl Hash for Subset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.b.iter() {
            elem.hash(state);
        }
    }
}

impl PartialOrd for Subset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subset {
    /// lexicographic on the sorted element sequence; any total order
    /// consistent with equality works as a tie-break
    fn cmp(&self, other: &Self) -> Ordering {
        self.b.iter().cmp(other.b.iter())
    }
}

impl Lattice for Subset {
    fn subset_eq(&self, other: &Self) -> bool {
        self.b.is_subset(&other.b)
    }

    fn meet(&self, other: &Self, _tight: bool) -> Option<Self> {
        let mut b = self.b.clone();
        b.intersect_with(&other.b);
        if b.is_empty() {
            None
        } else {
            Some(Subset { b })
        }
    }

    fn join(&self, other: &Self, _tight: bool) -> Option<Self> {
        let mut b = self.b.clone();
        b.union_with(&other.b);
        Some(Subset { b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meet_is_intersection() {
        let a = Subset::from_elems(&[1, 2, 3]);
        let b = Subset::from_elems(&[2, 3, 4]);
        assert_eq!(a.meet(&b, true), Some(Subset::from_elems(&[2, 3])));
        let c = Subset::from_elems(&[9]);
        assert_eq!(a.meet(&c, true), None);
    }

    #[test]
    fn join_is_union() {
        let a = Subset::from_elems(&[1]);
        let b = Subset::from_elems(&[4]);
        assert_eq!(a.join(&b, true), Some(Subset::from_elems(&[1, 4])));
    }

    #[test]
    fn order_consistent_with_eq() {
        let a = Subset::from_elems(&[0, 2]);
        let b = Subset::from_elems(&[1]);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_ne!(a.cmp(&b), Ordering::Equal);
    }
}
