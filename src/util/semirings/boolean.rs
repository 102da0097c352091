use std::{fmt::Display, ops};

use quickcheck::{Arbitrary, Gen};

use super::semiring_traits::Semiring;

/// The Boolean semiring: (+) is disjunction, (*) is conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BooleanSemiring(pub bool);

impl Semiring for BooleanSemiring {
    fn one() -> Self {
        BooleanSemiring(true)
    }

    fn zero() -> Self {
        BooleanSemiring(false)
    }
}

impl Display for BooleanSemiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ops::Add<BooleanSemiring> for BooleanSemiring {
    type Output = BooleanSemiring;

    fn add(self, rhs: BooleanSemiring) -> Self::Output {
        BooleanSemiring(self.0 || rhs.0)
    }
}

impl ops::Mul<BooleanSemiring> for BooleanSemiring {
    type Output = BooleanSemiring;

    fn mul(self, rhs: BooleanSemiring) -> Self::Output {
        BooleanSemiring(self.0 && rhs.0)
    }
}

impl Arbitrary for BooleanSemiring {
    fn arbitrary(g: &mut Gen) -> BooleanSemiring {
        BooleanSemiring(bool::arbitrary(g))
    }
}
