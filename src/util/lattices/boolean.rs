use quickcheck::{Arbitrary, Gen};

use super::lattice_traits::Lattice;

/// The flat lattice of Boolean values: every guard is a single literal
/// value, so containment is equality, the meet of distinct atoms is empty,
/// and their join is never representable as a single atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoolAtom(pub bool);

impl Lattice for BoolAtom {
    fn subset_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn meet(&self, other: &Self, _tight: bool) -> Option<Self> {
        if self == other {
            Some(*self)
        } else {
            None
        }
    }

    fn join(&self, other: &Self, _tight: bool) -> Option<Self> {
        if self == other {
            Some(*self)
        } else {
            None
        }
    }
}

impl Arbitrary for BoolAtom {
    fn arbitrary(g: &mut Gen) -> BoolAtom {
        BoolAtom(bool::arbitrary(g))
    }
}
