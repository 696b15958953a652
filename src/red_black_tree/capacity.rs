use super::RedBlackTree;
use crate::raw::RawRedBlackTree;

impl<K, V> RedBlackTree<K, V> {
    /// Creates an empty tree with room for at least `capacity` entries before the node arena
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, i32> = RedBlackTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            raw: RawRedBlackTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the tree can hold without reallocating.
    ///
    /// Slots freed by [`remove`](RedBlackTree::remove) are reused, so a tree that shrinks and
    /// grows again stays within its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, i32> = RedBlackTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    ///
    /// let capacity = tree.capacity();
    /// for key in 0..32 {
    ///     tree.insert(key, key);
    /// }
    /// for key in 0..16 {
    ///     tree.remove(&key);
    /// }
    /// for key in 100..116 {
    ///     tree.insert(key, key);
    /// }
    /// assert_eq!(tree.capacity(), capacity);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
