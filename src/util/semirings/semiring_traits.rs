//! A semiring is a set R equipped with two binary operations (+) and (*) such that:
//! 1. (R, +) is a commutative monoid with identity 0
//! 2. (R, *) is a monoid with identity 1
//! 3. Multiplication distributes over addition
//! 4. Multiplication by 0 annihilates R
//!
//! Leaves of a diagram carry semiring values, so on top of the algebra the
//! engine needs equality and a hash (for interning) and a total order (for
//! tie-breaking).
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops;

pub trait Semiring:
    Debug
    + Clone
    + Copy
    + Display
    + Eq
    + Ord
    + Hash
    + ops::Add<Self, Output = Self>
    + ops::Mul<Self, Output = Self>
{
    fn one() -> Self;
    fn zero() -> Self;
}
