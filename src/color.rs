/// The color of a node in a [`RedBlackTree`](crate::RedBlackTree).
///
/// Exposed through [`NodeRef::color`](crate::NodeRef::color) so that callers can render or audit
/// the tree's shape. Colors are never set from outside the crate.
///
/// # Examples
///
/// ```
/// use beni_tree::{Color, RedBlackTree};
///
/// let tree = RedBlackTree::from([(2, "b"), (1, "a"), (3, "c")]);
/// let root = tree.root().unwrap();
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().unwrap().color(), Color::Red);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}
