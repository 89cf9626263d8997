use crate::{
    arena::NodeIndex,
    node::{Node, Nodes},
};

/// An in-order iterator over references to the values in an
/// [`IntervalTree`], yielding them ordered by their interval endpoints.
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug)]
pub struct RefIter<'a, E, T> {
    arena: &'a Nodes<E, T>,
    stack: Vec<&'a Node<E, T>>,
}

impl<'a, E, T> RefIter<'a, E, T> {
    pub(crate) fn new(arena: &'a Nodes<E, T>, root: Option<NodeIndex>) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeIndex>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            let node = &self.arena[v];
            self.stack.push(node);
            ptr = node.left();
        }
    }
}

impl<'a, E, T> Iterator for RefIter<'a, E, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(v.right());

        Some(v.value())
    }
}
