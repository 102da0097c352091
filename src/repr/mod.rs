//! Core data representations: diagram nodes, variables, and assignments
pub mod assignment;
pub mod node;
pub mod var_label;

pub use self::assignment::PartialAssignment;
pub use self::node::{Node, NodeId, ParityNodeHasher};
pub use self::var_label::{VarLabel, Variable};
