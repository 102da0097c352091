//! Branch guards are elements of a lattice of variable-values: each guard
//! stands for a set of values, and a branch is taken when the assigned
//! value's set is contained in the guard's.
//!
//! `meet` and `join` take a `tight` flag: a tight combiner may only answer
//! `Some` when the true bound is representable as a single lattice element.
//! `None` therefore means either "empty" or "exists but not nameable", and
//! callers that care about the difference must not ask for tightness.
use std::fmt::Debug;
use std::hash::Hash;

pub trait Lattice: Debug + Clone + Eq + Ord + Hash {
    /// containment: the extension of `self` lies inside the extension of
    /// `other`. Reflexive and transitive.
    fn subset_eq(&self, other: &Self) -> bool;

    /// greatest lower bound; `None` when the meet is empty, or when `tight`
    /// is set and the meet is not a single representable element
    fn meet(&self, other: &Self, tight: bool) -> Option<Self>;

    /// least upper bound; `None` when `tight` is set and the join is not a
    /// single representable element
    fn join(&self, other: &Self, tight: bool) -> Option<Self>;
}
