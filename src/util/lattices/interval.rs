use quickcheck::{Arbitrary, Gen};

use super::lattice_traits::Lattice;

/// Closed integer intervals `[lo, hi]`.
///
/// Meets are always representable (an intersection of intervals is an
/// interval), so the `tight` flag only matters for joins: the union of two
/// intervals with a gap between them is not an interval, and a tight join
/// answers `None` for it.
/// ```
/// use ladd::util::lattices::{Interval, Lattice};
///
/// let a = Interval::new(0, 5);
/// let b = Interval::new(3, 9);
/// assert_eq!(a.meet(&b, true), Some(Interval::new(3, 5)));
/// assert_eq!(a.join(&b, true), Some(Interval::new(0, 9)));
/// assert_eq!(Interval::new(0, 1).join(&Interval::new(4, 5), true), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    pub fn new(lo: i64, hi: i64) -> Interval {
        assert!(lo <= hi, "empty interval [{}, {}]", lo, hi);
        Interval { lo, hi }
    }

    /// The interval containing exactly `v`.
    pub fn point(v: i64) -> Interval {
        Interval::new(v, v)
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }
}

impl Lattice for Interval {
    fn subset_eq(&self, other: &Self) -> bool {
        other.lo <= self.lo && self.hi <= other.hi
    }

    fn meet(&self, other: &Self, _tight: bool) -> Option<Self> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo <= hi {
            Some(Interval::new(lo, hi))
        } else {
            None
        }
    }

    fn join(&self, other: &Self, tight: bool) -> Option<Self> {
        // adjacency closes a gap: [0,1] and [2,3] union to [0,3]
        let gap = self.hi.saturating_add(1) < other.lo || other.hi.saturating_add(1) < self.lo;
        if tight && gap {
            return None;
        }
        Some(Interval::new(self.lo.min(other.lo), self.hi.max(other.hi)))
    }
}

impl Arbitrary for Interval {
    fn arbitrary(g: &mut Gen) -> Interval {
        let lo = i64::arbitrary(g) % 8;
        let width = i64::arbitrary(g).rem_euclid(4);
        Interval::new(lo, lo + width)
    }
}
