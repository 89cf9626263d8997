use crate::{
    arena::NodeIndex,
    has_interval::HasInterval,
    interval::Interval,
    node::{Node, Nodes},
};

/// Decides which parts of the tree a [`PruningIter`] walks, and which of the
/// visited values it yields.
pub trait PruningOracle<E> {
    /// Returns true when a subtree whose intervals end no later than
    /// `subtree_max` may contain a match and should be descended into.
    fn visit_subtree(&self, subtree_max: &E, query: &Interval<E>) -> bool;

    /// Returns true when the node covering `interval` and its right subtree
    /// should be evaluated.
    fn visit_right(&self, interval: &Interval<E>, query: &Interval<E>) -> bool;

    /// Returns true if a value covering `interval` should be yielded.
    fn filter_yield(&self, interval: &Interval<E>, query: &Interval<E>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of the tree and
/// yields the values of nodes that match a pruning predicate.
#[derive(Debug)]
pub struct PruningIter<'a, E, T, P> {
    arena: &'a Nodes<E, T>,
    query: Interval<E>,
    stack: Vec<&'a Node<E, T>>,
    pruner: P,
}

impl<'a, E, T, P> PruningIter<'a, E, T, P>
where
    T: HasInterval<E>,
    P: PruningOracle<E>,
{
    pub(crate) fn new(
        arena: &'a Nodes<E, T>,
        root: Option<NodeIndex>,
        query: Interval<E>,
        pruner: P,
    ) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
            query,
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        this.push_subtree(root);

        this
    }

    /// The query interval this iterator was built for.
    pub fn query(&self) -> &Interval<E> {
        &self.query
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeIndex>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            let node = &self.arena[v];
            if !self.pruner.visit_subtree(node.subtree_max(), &self.query) {
                // Prune this subtree rooted at "v" from the search, including
                // the left descendants not yet pushed.
                break;
            }

            self.stack.push(node);
            ptr = node.left();
        }
    }
}

impl<'a, E, T, P> Iterator for PruningIter<'a, E, T, P>
where
    T: HasInterval<E>,
    P: PruningOracle<E>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if !self.pruner.visit_right(v.interval(), &self.query) {
                // Prune this node and the right subtree from the search.
                continue;
            }

            // Push the right subtree to be visited next.
            self.push_subtree(v.right());

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v.interval(), &self.query) {
                return Some(v.value());
            }
        }
    }
}
