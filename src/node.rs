use std::{cmp::Ordering, fmt::Debug};

use crate::{
    arena::{Arena, NodeIndex},
    error::CheckError,
    has_interval::HasInterval,
    interval::Interval,
};

pub(crate) type Nodes<E, T> = Arena<Node<E, T>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<E, T> {
    /// Child node indexes.
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,

    /// The number of levels in the subtree rooted at this node.
    ///
    /// A leaf has a height of 1, and an absent child a height of 0. A u8 is
    /// ample for any balanced tree that fits in memory.
    height: u8,

    /// The maximum end point of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: E,

    value: T,
}

impl<E, T> Node<E, T> {
    pub(crate) fn new(value: T) -> Self
    where
        T: HasInterval<E>,
        E: Clone,
    {
        Self {
            subtree_max: value.interval().end().clone(),
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn interval(&self) -> &Interval<E>
    where
        T: HasInterval<E>,
    {
        self.value.interval()
    }

    pub(crate) fn subtree_max(&self) -> &E {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Remove the left child link, if any.
    pub(crate) fn take_left(&mut self) -> Option<NodeIndex> {
        self.left.take()
    }

    /// Remove the right child link, if any.
    pub(crate) fn take_right(&mut self) -> Option<NodeIndex> {
        self.right.take()
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn child<E, T>(arena: &Nodes<E, T>, n: NodeIndex, side: Side) -> Option<NodeIndex> {
    match side {
        Side::Left => arena[n].left,
        Side::Right => arena[n].right,
    }
}

fn set_child<E, T>(arena: &mut Nodes<E, T>, n: NodeIndex, side: Side, v: Option<NodeIndex>) {
    match side {
        Side::Left => arena[n].left = v,
        Side::Right => arena[n].right = v,
    }
}

/// Insert `value` into the subtree rooted at `root`, returning the root of
/// the (possibly rotated) subtree.
///
/// Values with equal endpoints are placed after the existing ones.
pub(crate) fn insert<E, T>(arena: &mut Nodes<E, T>, root: Option<NodeIndex>, value: T) -> NodeIndex
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    let n = match root {
        Some(v) => v,
        None => return arena.insert(Node::new(value)),
    };

    let side = match value.interval().cmp_endpoints(arena[n].interval()) {
        Ordering::Less => Side::Left,
        Ordering::Equal | Ordering::Greater => Side::Right,
    };

    let subtree = child(arena, n, side);
    let subtree = insert(arena, subtree, value);
    set_child(arena, n, side, Some(subtree));

    // Determine the balance factor of the subtree rooted at n and correct it
    // if the absolute difference in height between branches is > 1.
    let n = rebalance(arena, n);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(arena, n).abs() <= 1);
    n
}

/// Remove the first value found in the subtree rooted at `root` whose
/// interval has the same endpoints as `target` and that satisfies `pred`.
///
/// Returns the new subtree root, and the removed value if any. If nothing is
/// removed the subtree is left untouched.
pub(crate) fn remove<E, T, F>(
    arena: &mut Nodes<E, T>,
    root: Option<NodeIndex>,
    target: &Interval<E>,
    pred: &mut F,
) -> (Option<NodeIndex>, Option<T>)
where
    E: Ord + Clone,
    T: HasInterval<E>,
    F: FnMut(&T) -> bool,
{
    let n = match root {
        Some(v) => v,
        None => return (None, None),
    };

    // Prune this subtree from the search if the maximum upper bound in the
    // subtree is less than the search upper bound. If true, this subtree
    // cannot contain the search interval.
    if *arena[n].subtree_max() < *target.end() {
        return (Some(n), None);
    }

    let removed = match target.cmp_endpoints(arena[n].interval()) {
        Ordering::Less => remove_from_child(arena, n, Side::Left, target, pred),
        Ordering::Greater => remove_from_child(arena, n, Side::Right, target, pred),
        Ordering::Equal if pred(arena[n].value()) => return unlink(arena, n),
        Ordering::Equal => {
            // Rotations can move values with equal endpoints to either side
            // of this node.
            match remove_from_child(arena, n, Side::Left, target, pred) {
                Some(v) => Some(v),
                None => remove_from_child(arena, n, Side::Right, target, pred),
            }
        }
    };

    match removed {
        Some(v) => (Some(rebalance(arena, n)), Some(v)),
        None => (Some(n), None),
    }
}

fn remove_from_child<E, T, F>(
    arena: &mut Nodes<E, T>,
    n: NodeIndex,
    side: Side,
    target: &Interval<E>,
    pred: &mut F,
) -> Option<T>
where
    E: Ord + Clone,
    T: HasInterval<E>,
    F: FnMut(&T) -> bool,
{
    let subtree = child(arena, n, side);
    let (subtree, removed) = remove(arena, subtree, target, pred);
    let removed = removed?;
    set_child(arena, n, side, subtree);
    Some(removed)
}

/// Unlink `n` from the tree, returning the root of the subtree that replaces
/// it and the value `n` held.
fn unlink<E, T>(arena: &mut Nodes<E, T>, n: NodeIndex) -> (Option<NodeIndex>, Option<T>)
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    // This node may have 0, 1 or 2 child node(s):
    //
    //                          +----------+
    //                          |  parent  |
    //                          +----------+
    //                                |
    //                                v
    //                          +----------+
    //                     +----|    n     |----+
    //                     |    +----------+    |
    //                     |                    |
    //                     v                    v
    //               +-----------+       +------------+
    //               |  n.left   |       |  n.right   |
    //               +-----------+       +------------+
    //
    // With two children, the minimum node of "n.right" (the successor of "n"
    // in an in-order traversal) is extracted and takes the place of "n",
    // adopting both subtrees.
    //
    // With a single child, that child (a leaf, by the AVL property) replaces
    // "n". With no children, the parent simply drops the link.
    let replacement = match (arena[n].left, arena[n].right) {
        (Some(left), Some(right)) => {
            let (right, min) = extract_subtree_min(arena, right);

            // The "min" node is guaranteed to have no left pointer as it is
            // the left-most / minimum node in the subtree, and its right
            // pointer was relinked in its place.
            debug_assert!(arena[min].left.is_none());
            debug_assert!(arena[min].right.is_none());

            arena[min].left = Some(left);
            arena[min].right = right;
            Some(rebalance(arena, min))
        }
        (left, right) => left.or(right),
    };

    let old = arena.remove(n);
    (replacement, Some(old.into_value()))
}

/// Extracts the node holding the minimum subtree value of `root`, linking the
/// right subtree of the extracted node in its place.
///
/// Returns the new subtree root (if any) and the detached minimum node.
fn extract_subtree_min<E, T>(
    arena: &mut Nodes<E, T>,
    root: NodeIndex,
) -> (Option<NodeIndex>, NodeIndex)
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    let left = match arena[root].left {
        Some(v) => v,
        None => {
            // "root" is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //                \
            //                 5
            // ```
            //
            // Unlink the right node of "root", which takes its place (if
            // any).
            let right = arena[root].take_right();
            return (right, root);
        }
    };

    // Descend left to the leaf.
    let (left, min) = extract_subtree_min(arena, left);
    arena[root].left = left;

    let root = rebalance(arena, root);
    debug_assert!(balance(arena, root).abs() <= 1);
    (Some(root), min)
}

/// Search the subtree rooted at `root` for a value with the same endpoints as
/// `target` that satisfies `pred`.
pub(crate) fn find<E, T, F>(
    arena: &Nodes<E, T>,
    root: Option<NodeIndex>,
    target: &Interval<E>,
    pred: &mut F,
) -> Option<NodeIndex>
where
    E: Ord,
    T: HasInterval<E>,
    F: FnMut(&T) -> bool,
{
    let n = root?;
    let node = &arena[n];

    if *node.subtree_max() < *target.end() {
        return None;
    }

    match target.cmp_endpoints(node.interval()) {
        Ordering::Less => find(arena, node.left, target, pred),
        Ordering::Greater => find(arena, node.right, target, pred),
        Ordering::Equal if pred(node.value()) => Some(n),
        Ordering::Equal => match find(arena, node.left, target, pred) {
            Some(v) => Some(v),
            None => find(arena, node.right, target, pred),
        },
    }
}

/// Link the in-order sequence of nodes in `ordered` into a height-balanced
/// subtree, returning its root.
///
/// The middle node of each slice becomes the subtree root, recursively.
pub(crate) fn rebuild<E, T>(arena: &mut Nodes<E, T>, ordered: &[NodeIndex]) -> Option<NodeIndex>
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    let (left, rest) = ordered.split_at(ordered.len() / 2);
    let (&n, right) = rest.split_first()?;

    let left = rebuild(arena, left);
    let right = rebuild(arena, right);

    arena[n].left = left;
    arena[n].right = right;
    update_height(arena, n);
    update_subtree_max(arena, n);

    Some(n)
}

/// Validate the BST, AVL and interval tree properties of the subtree rooted
/// at `n`.
pub(crate) fn check<E, T>(arena: &Nodes<E, T>, n: NodeIndex) -> Result<(), CheckError>
where
    E: Ord + Debug,
    T: HasInterval<E>,
{
    let node = &arena[n];
    let describe = || format!("{:?}", node.interval());

    // Invariant 1: the left child is never ordered after this node, and the
    // right child never before it.
    let left_ok = node
        .left
        .map(|v| arena[v].interval().cmp_endpoints(node.interval()) != Ordering::Greater)
        .unwrap_or(true);
    let right_ok = node
        .right
        .map(|v| arena[v].interval().cmp_endpoints(node.interval()) != Ordering::Less)
        .unwrap_or(true);
    if !(left_ok && right_ok) {
        return Err(CheckError::Order {
            interval: describe(),
        });
    }

    // Invariant 2: the height of this node is always +1 of the maximum child
    // height.
    let want = height(arena, node.left).max(height(arena, node.right)) + 1;
    if node.height != want {
        return Err(CheckError::Height {
            interval: describe(),
            got: node.height,
            want,
        });
    }

    // Invariant 3: the absolute height difference between the left subtree
    // and right subtree (the "balance factor") cannot exceed 1.
    let skew = balance(arena, n);
    if skew.abs() > 1 {
        return Err(CheckError::Balance {
            interval: describe(),
            balance: skew,
        });
    }

    // Invariant 4: the subtree max must be equal to either the largest of the
    // two child subtree maxes, or its own upper bound.
    let want = [node.left, node.right]
        .into_iter()
        .flatten()
        .map(|v| arena[v].subtree_max())
        .fold(node.interval().end(), |acc, v| acc.max(v));
    if node.subtree_max() != want {
        return Err(CheckError::SubtreeMax {
            interval: describe(),
            got: format!("{:?}", node.subtree_max()),
            want: format!("{want:?}"),
        });
    }

    for v in [node.left, node.right].into_iter().flatten() {
        check(arena, v)?;
    }

    Ok(())
}

pub(crate) fn height<E, T>(arena: &Nodes<E, T>, n: Option<NodeIndex>) -> u8 {
    n.map(|v| arena[v].height()).unwrap_or_default()
}

fn update_height<E, T>(arena: &mut Nodes<E, T>, n: NodeIndex) {
    let h = height(arena, arena[n].left).max(height(arena, arena[n].right)) + 1;
    arena[n].height = h;
}

fn update_subtree_max<E, T>(arena: &mut Nodes<E, T>, n: NodeIndex)
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    let node = &arena[n];
    let new_max = [node.left, node.right]
        .into_iter()
        .flatten()
        .map(|v| arena[v].subtree_max())
        .fold(node.interval().end(), |acc, v| acc.max(v))
        .clone();

    arena[n].subtree_max = new_max;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<E, T>(arena: &Nodes<E, T>, n: NodeIndex) -> i16 {
    height(arena, arena[n].left) as i16 - height(arena, arena[n].right) as i16
}

/// Recompute the height and subtree max of `n` and restore the AVL balance of
/// the subtree rooted at it, returning the new subtree root.
fn rebalance<E, T>(arena: &mut Nodes<E, T>, n: NodeIndex) -> NodeIndex
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    // Recompute the height of the (possibly relocated) node.
    update_height(arena, n);

    let (left, right) = (arena[n].left, arena[n].right);
    let root = match (balance(arena, n), left, right) {
        // Left-heavy
        (2.., Some(l), _) if balance(arena, l) >= 0 => rotate_right(arena, n, l),
        (2.., Some(l), _) => {
            let l = match arena[l].right {
                Some(lr) => rotate_left(arena, l, lr),
                None => l,
            };
            arena[n].left = Some(l);
            rotate_right(arena, n, l)
        }
        // Right-heavy
        (..=-2, _, Some(r)) if balance(arena, r) <= 0 => rotate_left(arena, n, r),
        (..=-2, _, Some(r)) => {
            let r = match arena[r].left {
                Some(rl) => rotate_right(arena, r, rl),
                None => r,
            };
            arena[n].right = Some(r);
            rotate_left(arena, n, r)
        }
        _ => {
            // The tree is well balanced.
            update_subtree_max(arena, n);
            n
        }
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(arena, root).abs() <= 1);
    root
}

/// Left rotate the given subtree rooted at `x` around its right child, the
/// pivot point `P`, returning `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
fn rotate_left<E, T>(arena: &mut Nodes<E, T>, x: NodeIndex, p: NodeIndex) -> NodeIndex
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    debug_assert_eq!(arena[x].right, Some(p));

    arena[x].right = arena[p].take_left();
    update_height(arena, x);
    update_subtree_max(arena, x);

    arena[p].left = Some(x);
    update_height(arena, p);
    update_subtree_max(arena, p);

    p
}

/// Right rotate the given subtree rooted at `y` around its left child, the
/// pivot point `P`, returning `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
fn rotate_right<E, T>(arena: &mut Nodes<E, T>, y: NodeIndex, p: NodeIndex) -> NodeIndex
where
    E: Ord + Clone,
    T: HasInterval<E>,
{
    debug_assert_eq!(arena[y].left, Some(p));

    arena[y].left = arena[p].take_right();
    update_height(arena, y);
    update_subtree_max(arena, y);

    arena[p].right = Some(y);
    update_height(arena, p);
    update_subtree_max(arena, p);

    p
}
