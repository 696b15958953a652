use core::fmt;
use core::ptr;

use crate::Color;
use crate::raw::{NodeId, RawRedBlackTree};

/// A read-only view of one node of a [`RedBlackTree`](super::RedBlackTree).
///
/// Obtained from [`RedBlackTree::root`](super::RedBlackTree::root) and then by walking the
/// `left`/`right`/`parent` links. The view borrows the tree, so the structure it reports cannot
/// change while it is alive. Two `NodeRef`s compare equal when they point at the same node of the
/// same tree.
///
/// # Examples
///
/// ```
/// use beni_tree::{Color, RedBlackTree};
///
/// let tree = RedBlackTree::from([(13, ()), (8, ()), (17, ()), (1, ())]);
/// let root = tree.root().unwrap();
/// let one = root.left().and_then(|eight| eight.left()).unwrap();
///
/// assert_eq!(*one.key(), 1);
/// assert_eq!(one.color(), Color::Red);
/// assert_eq!(one.grandparent(), Some(root));
/// assert_eq!(one.uncle().map(|n| *n.key()), Some(17));
/// assert_eq!(one.sibling(), None);
/// ```
pub struct NodeRef<'a, K, V> {
    tree: &'a RawRedBlackTree<K, V>,
    id: NodeId,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(tree: &'a RawRedBlackTree<K, V>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| NodeRef::new(self.tree, id))
    }

    /// The key stored in this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.tree.node(self.id).key
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.tree.node(self.id).value
    }

    /// The color of this node.
    #[must_use]
    pub fn color(&self) -> Color {
        self.tree.node(self.id).color
    }

    /// The left child, or `None` if it is an empty leaf.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.wrap(self.tree.node(self.id).left())
    }

    /// The right child, or `None` if it is an empty leaf.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.wrap(self.tree.node(self.id).right())
    }

    /// The node this one hangs from, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.wrap(self.tree.parent(self.id))
    }

    /// The parent's parent, or `None` for the root and its children.
    #[must_use]
    pub fn grandparent(&self) -> Option<Self> {
        self.wrap(self.tree.grandparent(self.id))
    }

    /// The grandparent's other child, or `None` when there is no grandparent or it has only
    /// this one child.
    #[must_use]
    pub fn uncle(&self) -> Option<Self> {
        self.wrap(self.tree.uncle(self.id))
    }

    /// The parent's other child, or `None` for the root or an only child.
    #[must_use]
    pub fn sibling(&self) -> Option<Self> {
        self.wrap(self.tree.sibling(self.id))
    }

    /// Number of black nodes on any path from this node down to an empty leaf, not counting
    /// this node.
    ///
    /// Follows the leftmost path only; in a valid tree every path gives the same answer.
    #[must_use]
    pub fn black_height(&self) -> usize {
        self.tree.black_height(self.id)
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K, V> PartialEq for NodeRef<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
