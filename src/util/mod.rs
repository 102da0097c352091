//! Generic algebraic structures used throughout the library
pub mod lattices;
pub mod semirings;
