use std::fmt::Debug;

use log::{debug, trace};

use crate::{
    arena::NodeIndex,
    error::CheckError,
    has_interval::HasInterval,
    interval::Interval,
    iter::{EnclosedPruner, OverlapsPruner, OwnedIter, PruningIter, RefIter},
    node::{self, Nodes},
};

/// A self-balancing interval tree (an augmented AVL tree) indexing values of
/// type `T` by the [`Interval`] they cover.
///
/// Values are ordered by their interval's `(begin, end)` endpoints. Multiple
/// values may share the same endpoints.
///
/// ```
/// use interspan::{Interval, IntervalTree, ValuedInterval};
///
/// let mut t = IntervalTree::<i32, _>::new();
/// t.insert(ValuedInterval::new("lunch", Interval::new(12, 13).unwrap()));
/// t.insert(ValuedInterval::new("meeting", Interval::new(9, 12).unwrap()));
///
/// let busy = t
///     .overlapping(&Interval::new(11, 14).unwrap())
///     .map(|v| *v.value())
///     .collect::<Vec<_>>();
///
/// assert_eq!(busy, ["meeting", "lunch"]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<E, T> {
    pub(crate) nodes: Nodes<E, T>,
    pub(crate) root: Option<NodeIndex>,
    len: usize,
}

impl<E, T> Default for IntervalTree<E, T> {
    fn default() -> Self {
        Self {
            nodes: Default::default(),
            root: None,
            len: 0,
        }
    }
}

impl<E, T> IntervalTree<E, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree: 0 when empty, 1 for a single value.
    pub fn height(&self) -> usize {
        usize::from(node::height(&self.nodes, self.root))
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        debug!("clearing interval tree with {} values", self.len);

        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Iterate over references to all values, ordered by the `(begin, end)`
    /// endpoints of their intervals.
    pub fn iter(&self) -> RefIter<'_, E, T> {
        RefIter::new(&self.nodes, self.root)
    }

    /// The arena indexes of all nodes, in order.
    fn in_order(&self) -> Vec<NodeIndex> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = vec![];
        let mut ptr = self.root;

        loop {
            while let Some(v) = ptr {
                stack.push(v);
                ptr = self.nodes[v].left();
            }

            match stack.pop() {
                Some(v) => {
                    out.push(v);
                    ptr = self.nodes[v].right();
                }
                None => return out,
            }
        }
    }
}

impl<E, T> IntervalTree<E, T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    /// Insert `value`, indexed by the interval it covers.
    ///
    /// Values with the same endpoints as existing values are retained
    /// alongside them.
    pub fn insert(&mut self, value: T) {
        self.root = Some(node::insert(&mut self.nodes, self.root, value));
        self.len += 1;

        trace!("inserted value, tree len {}", self.len);
    }

    /// Remove one value equal to `value`, returning true if a value was
    /// removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(value.interval(), |v| v == value).is_some()
    }

    /// Remove and return the first value whose interval has the same
    /// `(begin, end)` endpoints as `interval` and that satisfies `pred`.
    pub fn remove_by<F>(&mut self, interval: &Interval<E>, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (root, removed) = node::remove(&mut self.nodes, self.root, interval, &mut pred);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
            trace!("removed value, tree len {}", self.len);
        }

        removed
    }

    /// Returns true if a value covering exactly `interval` (including its
    /// bounds) is stored in the tree.
    pub fn contains_interval(&self, interval: &Interval<E>) -> bool {
        node::find(&self.nodes, self.root, interval, &mut |v: &T| {
            v.interval() == interval
        })
        .is_some()
    }

    /// Returns true if a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        node::find(&self.nodes, self.root, value.interval(), &mut |v: &T| {
            v == value
        })
        .is_some()
    }

    /// Iterate over the values whose interval overlaps `query`, in endpoint
    /// order.
    pub fn overlapping(&self, query: &Interval<E>) -> PruningIter<'_, E, T, OverlapsPruner> {
        PruningIter::new(&self.nodes, self.root, query.clone(), OverlapsPruner)
    }

    /// Collect the values whose interval overlaps `query`.
    pub fn get_overlapping(&self, query: &Interval<E>) -> Vec<&T> {
        self.overlapping(query).collect()
    }

    /// Returns true if any value overlaps `query`.
    pub fn overlaps_any(&self, query: &Interval<E>) -> bool {
        self.overlapping(query).next().is_some()
    }

    /// Iterate over the values whose interval contains the point `p`.
    pub fn stab(&self, p: &E) -> PruningIter<'_, E, T, OverlapsPruner> {
        PruningIter::new(
            &self.nodes,
            self.root,
            Interval::point(p.clone()),
            OverlapsPruner,
        )
    }

    /// Iterate over the values whose interval lies entirely within `query`.
    pub fn enclosed_by(&self, query: &Interval<E>) -> PruningIter<'_, E, T, EnclosedPruner> {
        PruningIter::new(&self.nodes, self.root, query.clone(), EnclosedPruner)
    }

    /// Keep only the values for which `pred` returns true.
    ///
    /// The tree is left height-balanced.
    pub fn retain<F>(&mut self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        let (keep, drop): (Vec<_>, Vec<_>) = self
            .in_order()
            .into_iter()
            .partition(|&v| pred(self.nodes[v].value()));

        for v in drop {
            self.nodes.remove(v);
        }

        self.root = node::rebuild(&mut self.nodes, &keep);
        self.len = keep.len();
    }

    /// Rebuild the tree into a height-balanced shape.
    ///
    /// The tree keeps itself balanced as values are inserted and removed;
    /// this additionally produces the minimum possible height.
    pub fn balance(&mut self) {
        let before = self.height();

        let order = self.in_order();
        self.root = node::rebuild(&mut self.nodes, &order);

        debug!(
            "balanced interval tree with {} values, height {} -> {}",
            self.len,
            before,
            self.height()
        );
    }

    /// Validate the BST, AVL and interval tree properties of the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckError`] found.
    pub fn check(&self) -> Result<(), CheckError>
    where
        E: Debug,
    {
        if let Some(root) = self.root {
            node::check(&self.nodes, root)?;
        }

        // The in-order walk must yield non-decreasing endpoints.
        let order = self.in_order();
        for w in order.windows(2) {
            let (a, b) = (self.nodes[w[0]].interval(), self.nodes[w[1]].interval());
            if a.cmp_endpoints(b).is_gt() {
                return Err(CheckError::Order {
                    interval: format!("{b:?}"),
                });
            }
        }

        if order.len() != self.len || self.nodes.len() != self.len {
            return Err(CheckError::Len {
                tracked: self.len,
                reachable: order.len(),
            });
        }

        Ok(())
    }
}

impl<E, T> IntoIterator for IntervalTree<E, T> {
    type Item = T;
    type IntoIter = OwnedIter<E, T>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.nodes, self.root)
    }
}

impl<'a, E, T> IntoIterator for &'a IntervalTree<E, T> {
    type Item = &'a T;
    type IntoIter = RefIter<'a, E, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, T> Extend<T> for IntervalTree<E, T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<E, T> FromIterator<T> for IntervalTree<E, T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
