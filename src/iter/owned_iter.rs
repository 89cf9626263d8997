use crate::{arena::NodeIndex, node::Nodes};

/// An iterator of owned values as the underlying tree `into_iter()` impl,
/// yielding them ordered by their interval endpoints.
#[derive(Debug)]
pub struct OwnedIter<E, T> {
    arena: Nodes<E, T>,
    stack: Vec<NodeIndex>,
}

impl<E, T> OwnedIter<E, T> {
    pub(crate) fn new(arena: Nodes<E, T>, root: Option<NodeIndex>) -> Self {
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
            ptr = self.arena[v].take_left();
            self.stack.push(v);
        }
    }
}

impl<E, T> Iterator for OwnedIter<E, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        let right = self.arena[v].take_right();
        self.push_subtree(right);

        Some(self.arena.remove(v).into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every node still in the arena is yet to be yielded.
        let n = self.arena.len();
        (n, Some(n))
    }
}

impl<E, T> ExactSizeIterator for OwnedIter<E, T> {}
