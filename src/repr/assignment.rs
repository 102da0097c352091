//! Partial assignments of guard values to variables, used by `restrict`
use itertools::Itertools;

use crate::repr::var_label::Variable;

/// A finite set of `(variable, guard)` facts, at most one per variable.
///
/// Construction sorts the pairs by variable so the engine can traverse a
/// diagram and the assignment in lockstep. When the same variable is listed
/// more than once, the first pair wins and the rest are dropped.
/// ```
/// use ladd::repr::{PartialAssignment, VarLabel};
///
/// let a = PartialAssignment::new(vec![
///     (VarLabel::new(2), true),
///     (VarLabel::new(0), false),
///     (VarLabel::new(2), false),
/// ]);
/// assert_eq!(
///     a.pairs(),
///     &[(VarLabel::new(0), false), (VarLabel::new(2), true)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialAssignment<V, L> {
    pairs: Vec<(V, L)>,
}

impl<V: Variable, L> PartialAssignment<V, L> {
    pub fn new(pairs: Vec<(V, L)>) -> PartialAssignment<V, L> {
        let pairs = pairs
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .dedup_by(|a, b| a.0 == b.0)
            .collect();
        PartialAssignment { pairs }
    }

    /// An assignment constraining a single variable.
    pub fn single(var: V, guard: L) -> PartialAssignment<V, L> {
        PartialAssignment {
            pairs: vec![(var, guard)],
        }
    }

    pub fn pairs(&self) -> &[(V, L)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(V, L)> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::var_label::VarLabel;

    #[test]
    fn sorts_by_variable() {
        let a = PartialAssignment::new(vec![
            (VarLabel::new(3), 'a'),
            (VarLabel::new(1), 'b'),
        ]);
        assert_eq!(a.pairs()[0].0, VarLabel::new(1));
        assert_eq!(a.pairs()[1].0, VarLabel::new(3));
    }

    #[test]
    fn first_fact_wins() {
        let a = PartialAssignment::new(vec![
            (VarLabel::new(1), 'a'),
            (VarLabel::new(1), 'b'),
        ]);
        assert_eq!(a.pairs(), &[(VarLabel::new(1), 'a')]);
    }
}
