//! The diagram engine: hash-consing smart constructors and the semiring
//! algebra lifted pointwise to diagrams
use std::cell::RefCell;
use std::cmp::Ordering;

use log::debug;
use rustc_hash::FxHashMap;

use crate::backing_store::{InternTable, StoreError};
use crate::builder::cache::{AllApplyTable, Apply, ApplyTable};
use crate::builder::stats::BuilderStats;
use crate::repr::assignment::PartialAssignment;
use crate::repr::node::{Node, NodeId, ParityNodeHasher};
use crate::repr::var_label::Variable;
use crate::util::lattices::Lattice;
use crate::util::semirings::Semiring;

/// The two binary applies share one skeleton; this selects between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    Sum,
    Prod,
}

/// A decision-diagram engine over variables `V`, branch guards drawn from
/// the lattice `L`, and leaf values in the semiring `R`.
///
/// Every node lives in an interned store owned by the builder, so two
/// diagrams denote the same function exactly when their [`NodeId`]s are
/// equal (for diagrams built from the same atom basis). Operations take
/// `&self`; the builder is single-owner and not `Sync`.
///
/// ```
/// use ladd::builder::DiagramBuilder;
/// use ladd::repr::VarLabel;
/// use ladd::util::lattices::BoolAtom;
/// use ladd::util::semirings::CountingSemiring;
///
/// let builder: DiagramBuilder<VarLabel, BoolAtom, CountingSemiring> =
///     DiagramBuilder::new();
/// let x = VarLabel::new(0);
/// let a = builder.atom(x, BoolAtom(true), CountingSemiring(1), CountingSemiring(0));
/// let b = builder.atom(x, BoolAtom(true), CountingSemiring(2), CountingSemiring(0));
/// let s = builder.sum(a, b);
/// let when_true = &[(x, BoolAtom(true))];
/// assert_eq!(builder.eval(s, when_true), CountingSemiring(3));
/// ```
pub struct DiagramBuilder<V, L, R, T = AllApplyTable>
where
    V: Variable,
    L: Lattice,
    R: Semiring,
    T: ApplyTable,
{
    store: RefCell<InternTable<Node<V, L, R>>>,
    apply_table: RefCell<T>,
    hasher: ParityNodeHasher,
    stats: RefCell<BuilderStats>,
}

impl<V, L, R, T> DiagramBuilder<V, L, R, T>
where
    V: Variable,
    L: Lattice,
    R: Semiring,
    T: ApplyTable + Default,
{
    pub fn new() -> DiagramBuilder<V, L, R, T> {
        DiagramBuilder {
            store: RefCell::new(InternTable::new()),
            apply_table: RefCell::new(T::default()),
            hasher: ParityNodeHasher,
            stats: RefCell::new(BuilderStats::new()),
        }
    }

    /// Fetches a node out of the store. Internal callers only hand in ids
    /// the store issued, so this cannot miss.
    fn node(&self, u: NodeId) -> Node<V, L, R> {
        self.store.borrow().get(u).clone()
    }

    /// Checked node lookup for callers holding ids of unknown provenance
    /// (a stale id after [`clear`](Self::clear), or one from another
    /// builder).
    pub fn try_node(&self, u: NodeId) -> Result<Node<V, L, R>, StoreError> {
        self.store.borrow().try_get(u).cloned()
    }

    fn get_or_insert(&self, node: Node<V, L, R>) -> NodeId {
        self.store.borrow_mut().get_or_insert(node, &self.hasher)
    }

    /// The constant diagram returning `r` everywhere.
    pub fn leaf(&self, r: R) -> NodeId {
        self.get_or_insert(Node::Leaf(r))
    }

    /// Alias for [`leaf`](Self::leaf).
    pub fn constant(&self, r: R) -> NodeId {
        self.leaf(r)
    }

    /// Interns a branch, maintaining reduction: a branch whose arms agree
    /// is that arm.
    pub fn branch(&self, var: V, guard: L, hi: NodeId, lo: NodeId) -> NodeId {
        if hi == lo {
            return hi;
        }
        debug!("branch(var = {:?}, guard = {:?}, hi = {}, lo = {})", var, guard, hi, lo);
        self.get_or_insert(Node::Branch { var, guard, hi, lo })
    }

    /// The elementary diagram "if `var`'s value is in `guard` then `hi_r`
    /// else `lo_r`".
    pub fn atom(&self, var: V, guard: L, hi_r: R, lo_r: R) -> NodeId {
        let hi = self.leaf(hi_r);
        let lo = self.leaf(lo_r);
        self.branch(var, guard, hi, lo)
    }

    /// Structural equality of diagrams; sound as id equality because the
    /// store interns and the constructors reduce.
    pub fn equal(&self, x: NodeId, y: NodeId) -> bool {
        x == y
    }

    /// The constant value of a leaf, or `None` for a branch.
    pub fn peek(&self, u: NodeId) -> Option<R> {
        match self.node(u) {
            Node::Leaf(r) => Some(r),
            Node::Branch { .. } => None,
        }
    }

    /// Catamorphism over the diagram DAG, memoized per node so shared
    /// subdiagrams are visited once.
    pub fn fold<A, F, G>(&self, u: NodeId, leaf_f: F, branch_f: G) -> A
    where
        A: Clone,
        F: Fn(&R) -> A,
        G: Fn(&V, &L, A, A) -> A,
    {
        let mut memo: FxHashMap<NodeId, A> = FxHashMap::default();
        self.fold_h(u, &leaf_f, &branch_f, &mut memo)
    }

    fn fold_h<A, F, G>(
        &self,
        u: NodeId,
        leaf_f: &F,
        branch_f: &G,
        memo: &mut FxHashMap<NodeId, A>,
    ) -> A
    where
        A: Clone,
        F: Fn(&R) -> A,
        G: Fn(&V, &L, A, A) -> A,
    {
        if let Some(v) = memo.get(&u) {
            return v.clone();
        }
        let res = match self.node(u) {
            Node::Leaf(r) => leaf_f(&r),
            Node::Branch { var, guard, hi, lo } => {
                let h = self.fold_h(hi, leaf_f, branch_f, memo);
                let l = self.fold_h(lo, leaf_f, branch_f, memo);
                branch_f(&var, &guard, h, l)
            }
        };
        memo.insert(u, res.clone());
        res
    }

    /// Rewrites leaf values only, keeping the branch structure (up to the
    /// reduction rule: arms that become equal collapse).
    pub fn map_leaves<F: Fn(&R) -> R>(&self, u: NodeId, f: F) -> NodeId {
        self.fold(
            u,
            |r| self.leaf(f(r)),
            |var, guard, hi, lo| self.branch(var.clone(), guard.clone(), hi, lo),
        )
    }

    /// Specializes `u` under the partial assignment: for every total
    /// assignment consistent with it, the result and `u` agree.
    pub fn restrict(&self, assignment: &PartialAssignment<V, L>, u: NodeId) -> NodeId {
        self.restrict_h(assignment.pairs(), u)
    }

    /// Walks the diagram and the sorted pair list in lockstep. A pair is a
    /// hard fact about its variable: it either satisfies a guard on that
    /// variable or rules the guard out.
    fn restrict_h(&self, pairs: &[(V, L)], u: NodeId) -> NodeId {
        self.stats.borrow_mut().num_recursive_calls += 1;

        let (var, guard, hi, lo) = match self.node(u) {
            Node::Leaf(_) => return u,
            Node::Branch { var, guard, hi, lo } => (var, guard, hi, lo),
        };
        let (v, l) = match pairs.first() {
            None => return u,
            Some(pair) => pair,
        };

        match v.cmp(&var) {
            // the fact decides this branch; once a guard on `var` is
            // satisfied the fact is consumed, otherwise it still applies
            // to deeper guards on `var`
            Ordering::Equal => {
                if l.subset_eq(&guard) {
                    self.restrict_h(&pairs[1..], hi)
                } else {
                    self.restrict_h(pairs, lo)
                }
            }
            // a fact about a variable this diagram never tests
            Ordering::Less => self.restrict_h(&pairs[1..], u),
            // this level is unconstrained; rebuild around restricted arms
            Ordering::Greater => {
                let h = self.restrict_h(pairs, hi);
                let l = self.restrict_h(pairs, lo);
                self.branch(var, guard, h, l)
            }
        }
    }

    /// Pointwise semiring sum of two diagrams.
    pub fn sum(&self, x: NodeId, y: NodeId) -> NodeId {
        self.apply(OpKind::Sum, x, y)
    }

    /// Pointwise semiring product of two diagrams.
    pub fn prod(&self, x: NodeId, y: NodeId) -> NodeId {
        self.apply(OpKind::Prod, x, y)
    }

    fn combine_guards(&self, op: OpKind, a: &L, b: &L) -> Option<L> {
        match op {
            OpKind::Sum => a.join(b, true),
            OpKind::Prod => a.meet(b, true),
        }
    }

    /// One operand is the constant `r` (interned at `leaf`); `other` is
    /// the remaining operand. Identity and absorbing leaves short-circuit,
    /// anything else distributes over the other operand's leaves.
    fn apply_const(&self, op: OpKind, r: R, leaf: NodeId, other: NodeId) -> NodeId {
        match op {
            OpKind::Sum => {
                if r == R::zero() {
                    other
                } else {
                    self.map_leaves(other, |s| r + *s)
                }
            }
            OpKind::Prod => {
                if r == R::zero() {
                    leaf
                } else if r == R::one() {
                    other
                } else {
                    self.map_leaves(other, |s| r * *s)
                }
            }
        }
    }

    fn apply(&self, op: OpKind, x: NodeId, y: NodeId) -> NodeId {
        self.stats.borrow_mut().num_recursive_calls += 1;

        match (self.node(x), self.node(y)) {
            (Node::Leaf(r), _) => self.apply_const(op, r, x, y),
            (_, Node::Leaf(s)) => self.apply_const(op, s, y, x),
            (
                Node::Branch { var: vx, guard: lx, hi: tx, lo: fx },
                Node::Branch { var: vy, guard: ly, hi: ty, lo: fy },
            ) => {
                let key = match op {
                    OpKind::Sum => Apply::sum(x, y),
                    OpKind::Prod => Apply::prod(x, y),
                };
                let hash = self.apply_table.borrow().hash(&key);
                if let Some(res) = self.apply_table.borrow().get(key, hash) {
                    return res;
                }

                // the emitted root key is always the smaller of the two, so
                // the recursive results sit strictly below it
                let res = match vx.cmp(&vy) {
                    Ordering::Less => {
                        let t = self.apply(op, tx, y);
                        let f = self.apply(op, fx, y);
                        self.branch(vx, lx, t, f)
                    }
                    Ordering::Greater => {
                        let t = self.apply(op, x, ty);
                        let f = self.apply(op, x, fy);
                        self.branch(vy, ly, t, f)
                    }
                    Ordering::Equal => match self.combine_guards(op, &lx, &ly) {
                        // the guards combine into a single atom
                        Some(l) => {
                            let t = self.apply(op, tx, ty);
                            let f = self.apply(op, fx, fy);
                            self.branch(vx, l, t, f)
                        }
                        // disjoint, or combinable only into something the
                        // lattice cannot name: split on the smaller guard
                        // and push it into the other operand as a fact
                        None => match lx.cmp(&ly) {
                            Ordering::Less => {
                                let yr = self.restrict_h(&[(vx.clone(), lx.clone())], y);
                                let t = self.apply(op, tx, yr);
                                let f = self.apply(op, fx, y);
                                self.branch(vx, lx, t, f)
                            }
                            Ordering::Greater => {
                                let xr = self.restrict_h(&[(vy.clone(), ly.clone())], x);
                                let t = self.apply(op, xr, ty);
                                let f = self.apply(op, x, fy);
                                self.branch(vy, ly, t, f)
                            }
                            Ordering::Equal => panic!(
                                "lattice contract violation: equal guards {:?} failed to combine tightly",
                                lx
                            ),
                        },
                    },
                };

                self.apply_table.borrow_mut().insert(key, res, hash);
                res
            }
        }
    }

    /// Evaluates `u` under a total assignment: at each branch, the value
    /// assigned to the branch variable either lies in the guard or not.
    /// Panics if a variable on the evaluated path has no assigned value.
    pub fn eval(&self, u: NodeId, assignment: &[(V, L)]) -> R {
        match self.node(u) {
            Node::Leaf(r) => r,
            Node::Branch { var, guard, hi, lo } => {
                let value = assignment
                    .iter()
                    .find(|(v, _)| *v == var)
                    .map(|(_, l)| l)
                    .unwrap_or_else(|| panic!("eval: no value assigned to {:?}", var));
                if value.subset_eq(&guard) {
                    self.eval(hi, assignment)
                } else {
                    self.eval(lo, assignment)
                }
            }
        }
    }

    /// Renders `u` as a nested conditional expression, folding both arms.
    pub fn print_diagram(&self, u: NodeId) -> String {
        match self.node(u) {
            Node::Leaf(r) => format!("{}", r),
            Node::Branch { var, guard, hi, lo } => {
                let h = self.print_diagram(hi);
                let l = self.print_diagram(lo);
                format!("({:?} in {:?} ? {} : {})", var, guard, h, l)
            }
        }
    }

    /// Drops every interned node and cached application and resets ids to
    /// 0. All previously issued [`NodeId`]s become stale.
    pub fn clear(&self) {
        debug!("clearing node store and apply cache");
        self.store.borrow_mut().clear();
        self.apply_table.borrow_mut().clear();
    }

    /// Number of live interned nodes.
    pub fn num_nodes(&self) -> usize {
        self.store.borrow().num_interned()
    }

    /// Number of recursive calls executed so far by `restrict`, `sum`, and
    /// `prod`. This is a stable way to track performance.
    pub fn num_recursive_calls(&self) -> usize {
        self.stats.borrow().num_recursive_calls
    }

    pub fn stats(&self) -> BuilderStats {
        BuilderStats {
            num_recursive_calls: self.stats.borrow().num_recursive_calls,
            num_nodes: self.num_nodes(),
        }
    }
}

impl<V, L, R, T> Default for DiagramBuilder<V, L, R, T>
where
    V: Variable,
    L: Lattice,
    R: Semiring,
    T: ApplyTable + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::var_label::VarLabel;
    use crate::util::lattices::{BoolAtom, Interval};
    use crate::util::semirings::CountingSemiring;

    type Builder = DiagramBuilder<VarLabel, BoolAtom, CountingSemiring>;

    fn n(v: u64) -> CountingSemiring {
        CountingSemiring(v)
    }

    #[test]
    fn identical_atoms_share_an_id() {
        let builder = Builder::new();
        let x = VarLabel::new(0);
        let a = builder.atom(x, BoolAtom(true), n(1), n(0));
        let b = builder.atom(x, BoolAtom(true), n(1), n(0));
        assert!(builder.equal(a, b));
        // one branch and two leaves
        assert_eq!(builder.num_nodes(), 3);
    }

    #[test]
    fn branch_with_equal_arms_reduces() {
        let builder = Builder::new();
        let five = builder.leaf(n(5));
        let b = builder.branch(VarLabel::new(0), BoolAtom(true), five, five);
        assert_eq!(b, five);
    }

    #[test]
    fn sum_of_atoms_on_one_variable() {
        let builder = Builder::new();
        let x = VarLabel::new(0);
        let a = builder.atom(x, BoolAtom(true), n(1), n(0));
        let b = builder.atom(x, BoolAtom(true), n(2), n(0));
        let s = builder.sum(a, b);
        assert_eq!(builder.eval(s, &[(x, BoolAtom(true))]), n(3));
        assert_eq!(builder.eval(s, &[(x, BoolAtom(false))]), n(0));
    }

    #[test]
    fn prod_orders_variables() {
        let builder = Builder::new();
        let x = VarLabel::new(0);
        let y = VarLabel::new(1);
        let a = builder.atom(x, BoolAtom(true), n(1), n(0));
        let b = builder.atom(y, BoolAtom(true), n(1), n(0));
        let p = builder.prod(a, b);

        // root tests x, its hi arm tests y
        let root = builder.try_node(p).unwrap();
        let (rv, _) = root.key().expect("root is a branch");
        assert_eq!(*rv, x);
        if let Node::Branch { hi, .. } = root {
            let inner = builder.try_node(hi).unwrap();
            let (iv, _) = inner.key().expect("hi arm is a branch");
            assert_eq!(*iv, y);
        }

        for (xv, yv, expect) in [
            (true, true, 1),
            (true, false, 0),
            (false, true, 0),
            (false, false, 0),
        ] {
            let assignment = [(x, BoolAtom(xv)), (y, BoolAtom(yv))];
            assert_eq!(builder.eval(p, &assignment), n(expect));
        }
    }

    #[test]
    fn restrict_forces_arms() {
        let builder = Builder::new();
        let x = VarLabel::new(0);
        let a = builder.atom(x, BoolAtom(true), n(5), n(7));

        let yes = PartialAssignment::single(x, BoolAtom(true));
        assert_eq!(builder.restrict(&yes, a), builder.leaf(n(5)));

        let no = PartialAssignment::single(x, BoolAtom(false));
        assert_eq!(builder.restrict(&no, a), builder.leaf(n(7)));
    }

    #[test]
    fn construction_order_does_not_matter() {
        let builder = Builder::new();
        let atoms: Vec<NodeId> = (0..3)
            .map(|i| builder.atom(VarLabel::new(i), BoolAtom(true), n(i + 1), n(0)))
            .collect();
        let left = builder.sum(atoms[0], builder.sum(atoms[1], atoms[2]));
        let right = builder.sum(builder.sum(atoms[2], atoms[1]), atoms[0]);
        assert!(builder.equal(left, right));
    }

    #[test]
    fn clear_resets_ids() {
        let builder = Builder::new();
        let a = builder.atom(VarLabel::new(0), BoolAtom(true), n(1), n(0));
        assert!(a.value_usize() > 0);
        builder.clear();
        let first = builder.leaf(n(9));
        assert_eq!(first.value_usize(), 0);
    }

    #[test]
    fn stale_id_is_detected() {
        let builder = Builder::new();
        let a = builder.leaf(n(1));
        builder.clear();
        assert!(builder.try_node(a).is_err());
    }

    #[test]
    fn peek_exposes_leaves_only() {
        let builder = Builder::new();
        let c = builder.leaf(n(3));
        let a = builder.atom(VarLabel::new(0), BoolAtom(true), n(1), n(0));
        assert_eq!(builder.peek(c), Some(n(3)));
        assert_eq!(builder.peek(a), None);
    }

    #[test]
    fn overlapping_intervals_meet_in_prod() {
        let builder: DiagramBuilder<VarLabel, Interval, CountingSemiring> =
            DiagramBuilder::new();
        let x = VarLabel::new(0);
        let a = builder.atom(x, Interval::new(0, 5), n(2), n(0));
        let b = builder.atom(x, Interval::new(3, 9), n(3), n(0));
        let p = builder.prod(a, b);

        // only points in [3, 5] satisfy both guards
        assert_eq!(builder.eval(p, &[(x, Interval::point(4))]), n(6));
        assert_eq!(builder.eval(p, &[(x, Interval::point(1))]), n(0));
        assert_eq!(builder.eval(p, &[(x, Interval::point(8))]), n(0));
    }

    #[test]
    fn gapped_intervals_split_in_sum() {
        let builder: DiagramBuilder<VarLabel, Interval, CountingSemiring> =
            DiagramBuilder::new();
        let x = VarLabel::new(0);
        let a = builder.atom(x, Interval::new(0, 1), n(2), n(0));
        let b = builder.atom(x, Interval::new(4, 5), n(3), n(0));
        let s = builder.sum(a, b);

        assert_eq!(builder.eval(s, &[(x, Interval::point(0))]), n(2));
        assert_eq!(builder.eval(s, &[(x, Interval::point(5))]), n(3));
        assert_eq!(builder.eval(s, &[(x, Interval::point(3))]), n(0));
    }

    mod broken_lattice {
        use super::*;
        use crate::util::lattices::Lattice;

        /// claims nothing ever combines, even equal guards
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct Uncombinable(u8);

        impl Lattice for Uncombinable {
            fn subset_eq(&self, other: &Self) -> bool {
                self == other
            }
            fn meet(&self, _other: &Self, _tight: bool) -> Option<Self> {
                None
            }
            fn join(&self, _other: &Self, _tight: bool) -> Option<Self> {
                None
            }
        }

        #[test]
        #[should_panic(expected = "lattice contract violation")]
        fn equal_guards_that_refuse_to_combine_panic() {
            let builder: DiagramBuilder<VarLabel, Uncombinable, CountingSemiring> =
                DiagramBuilder::new();
            let x = VarLabel::new(0);
            let a = builder.atom(x, Uncombinable(1), CountingSemiring(1), CountingSemiring(0));
            let b = builder.atom(x, Uncombinable(1), CountingSemiring(2), CountingSemiring(0));
            builder.prod(a, b);
        }
    }
}
