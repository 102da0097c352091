use std::{fmt::Display, ops};

use super::semiring_traits::Semiring;

/// The tropical (min-plus) semiring: (+) is minimum, (*) is addition,
/// with an explicit infinity as the additive identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TropicalSemiring {
    Finite(i64),
    Infinity,
}

impl Semiring for TropicalSemiring {
    fn one() -> Self {
        TropicalSemiring::Finite(0)
    }

    fn zero() -> Self {
        TropicalSemiring::Infinity
    }
}

impl Display for TropicalSemiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TropicalSemiring::Finite(v) => write!(f, "{}", v),
            TropicalSemiring::Infinity => write!(f, "inf"),
        }
    }
}

impl ops::Add<TropicalSemiring> for TropicalSemiring {
    type Output = TropicalSemiring;

    fn add(self, rhs: TropicalSemiring) -> Self::Output {
        use TropicalSemiring::*;
        match (self, rhs) {
            (Infinity, r) => r,
            (l, Infinity) => l,
            (Finite(a), Finite(b)) => Finite(a.min(b)),
        }
    }
}

impl ops::Mul<TropicalSemiring> for TropicalSemiring {
    type Output = TropicalSemiring;

    fn mul(self, rhs: TropicalSemiring) -> Self::Output {
        use TropicalSemiring::*;
        match (self, rhs) {
            (Infinity, _) | (_, Infinity) => Infinity,
            (Finite(a), Finite(b)) => Finite(a.saturating_add(b)),
        }
    }
}
