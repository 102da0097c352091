use std::{fmt::Display, ops};

use quickcheck::{Arbitrary, Gen};

use super::semiring_traits::Semiring;

/// The counting semiring over machine naturals. Arithmetic wraps, which
/// keeps both monoid laws and distributivity exact (the ring Z/2^64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountingSemiring(pub u64);

impl Semiring for CountingSemiring {
    fn one() -> Self {
        CountingSemiring(1)
    }

    fn zero() -> Self {
        CountingSemiring(0)
    }
}

impl Display for CountingSemiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ops::Add<CountingSemiring> for CountingSemiring {
    type Output = CountingSemiring;

    fn add(self, rhs: CountingSemiring) -> Self::Output {
        CountingSemiring(self.0.wrapping_add(rhs.0))
    }
}

impl ops::Mul<CountingSemiring> for CountingSemiring {
    type Output = CountingSemiring;

    fn mul(self, rhs: CountingSemiring) -> Self::Output {
        CountingSemiring(self.0.wrapping_mul(rhs.0))
    }
}

impl Arbitrary for CountingSemiring {
    fn arbitrary(g: &mut Gen) -> CountingSemiring {
        // small values keep hand-checked expectations readable
        CountingSemiring(u64::arbitrary(g) % 16)
    }
}
