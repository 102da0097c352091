//! # ladd: decision diagrams over lattices and semirings
//!
//! **`ladd`** builds reduced, ordered, hash-consed decision diagrams
//! representing functions from variable assignments into a semiring. It is
//! generic over three algebraic parameters:
//!
//! - a variable domain `V` (anything ordered and hashable),
//! - a lattice `L` of variable-values used as branch guards,
//! - a semiring `R` of results stored at the leaves.
//!
//! Because every node is interned, structural equality of diagrams reduces
//! to equality of [`NodeId`][crate::repr::NodeId]s, and the semiring
//! operations lifted to diagrams (`sum`, `prod`) re-canonicalize their
//! results as they go.
//!
//! ## Basic usage
//!
//! ```rust
//! use ladd::builder::DiagramBuilder;
//! use ladd::repr::{PartialAssignment, VarLabel};
//! use ladd::util::lattices::BoolAtom;
//! use ladd::util::semirings::CountingSemiring;
//!
//! let builder: DiagramBuilder<VarLabel, BoolAtom, CountingSemiring> =
//!     DiagramBuilder::new();
//!
//! // f = if x0 then 2 else 0, g = if x1 then 3 else 0
//! let f = builder.atom(VarLabel::new(0), BoolAtom(true), CountingSemiring(2), CountingSemiring(0));
//! let g = builder.atom(VarLabel::new(1), BoolAtom(true), CountingSemiring(3), CountingSemiring(0));
//!
//! // pointwise product: 6 exactly when both variables are true
//! let p = builder.prod(f, g);
//! let both = [
//!     (VarLabel::new(0), BoolAtom(true)),
//!     (VarLabel::new(1), BoolAtom(true)),
//! ];
//! assert_eq!(builder.eval(p, &both), CountingSemiring(6));
//!
//! // pinning x0 to true leaves a diagram over x1 alone
//! let pinned = builder.restrict(
//!     &PartialAssignment::single(VarLabel::new(0), BoolAtom(true)),
//!     p,
//! );
//! assert_eq!(
//!     pinned,
//!     builder.atom(VarLabel::new(1), BoolAtom(true), CountingSemiring(6), CountingSemiring(0)),
//! );
//! ```
//!
//! ## Core components
//!
//! - **[`builder`]**: the engine. [`DiagramBuilder`][crate::builder::DiagramBuilder]
//!   owns the node store and apply cache and exposes the whole algebra.
//! - **[`repr`]**: node and id types, variable labels, partial assignments.
//! - **[`backing_store`]**: the value-to-id interner the engine sits on.
//! - **[`util`]**: the [`Lattice`][crate::util::lattices::Lattice] and
//!   [`Semiring`][crate::util::semirings::Semiring] traits with ready-made
//!   instances.
pub mod backing_store;
pub mod builder;
pub mod repr;
pub mod util;
