use std::ops::{Index, IndexMut};

/// The address of a slot in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

/// Index-addressed storage for tree nodes.
///
/// Vacated slots are recycled by subsequent inserts, so a [`NodeIndex`] is
/// only meaningful while the node it was issued for is still stored.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<NodeIndex>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<N> Arena<N> {
    pub(crate) fn insert(&mut self, node: N) -> NodeIndex {
        match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx.0].is_none());
                self.slots[idx.0] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of `idx`, freeing the slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is vacant.
    pub(crate) fn remove(&mut self, idx: NodeIndex) -> N {
        match self.slots[idx.0].take() {
            Some(v) => {
                self.free.push(idx);
                v
            }
            None => panic!("remove of vacant arena slot {}", idx.0),
        }
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<NodeIndex> for Arena<N> {
    type Output = N;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        match self.slots[idx.0] {
            Some(ref v) => v,
            None => panic!("access to vacant arena slot {}", idx.0),
        }
    }
}

impl<N> IndexMut<NodeIndex> for Arena<N> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        match self.slots[idx.0] {
            Some(ref mut v) => v,
            None => panic!("access to vacant arena slot {}", idx.0),
        }
    }
}
