use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::Error;
use crate::raw::{InorderCursor, RawRedBlackTree};

mod capacity;
mod node_ref;

pub use node_ref::NodeRef;

/// An ordered map based on a [red-black tree].
///
/// Given a key type with a [total order], the tree stores its entries in key order. Keys must
/// implement [`Ord`]; examples of keys with a total order are strings with lexicographical order
/// and numbers with their natural order.
///
/// Every insert and remove rebalances the tree before returning, so the longest root-to-leaf path
/// is never more than twice the shortest and [`insert`], [`remove`] and [`search`] all run in
/// O(log n) worst case. Nodes live in a single arena and refer to each other by index; removed
/// slots are recycled by later inserts.
///
/// Inserting never overwrites: a key that is already present is rejected and the stored value is
/// left alone.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the tree. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `RedBlackTree` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use beni_tree::RedBlackTree;
///
/// let mut ratings = RedBlackTree::new();
///
/// assert!(ratings.insert("Office Space", 4));
/// assert!(ratings.insert("Pulp Fiction", 5));
/// assert!(ratings.insert("The Godfather", 5));
///
/// // A second insert of the same key is rejected and keeps the first value.
/// assert!(!ratings.insert("Office Space", 1));
/// assert_eq!(ratings.search("Office Space"), Some(&4));
///
/// assert!(ratings.remove("Pulp Fiction"));
/// assert!(!ratings.remove("Pulp Fiction"));
///
/// for (movie, stars) in ratings.inorder() {
///     println!("{movie}: {stars}");
/// }
/// assert_eq!(ratings.len(), 2);
/// ```
///
/// A `RedBlackTree` with a known list of items can be initialized from an array:
///
/// ```
/// use beni_tree::RedBlackTree;
///
/// let tree = RedBlackTree::from([(13, "m"), (8, "h"), (17, "q")]);
/// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [8, 13, 17]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`insert`]: RedBlackTree::insert
/// [`remove`]: RedBlackTree::remove
/// [`search`]: RedBlackTree::search
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct RedBlackTree<K, V> {
    raw: RawRedBlackTree<K, V>,
}

/// An in-order iterator over the entries of a `RedBlackTree`.
///
/// This `struct` is created by the [`inorder`] method on [`RedBlackTree`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use beni_tree::RedBlackTree;
///
/// let tree = RedBlackTree::from([(2, "b"), (1, "a")]);
/// let mut iter = tree.inorder();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`inorder`]: RedBlackTree::inorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Inorder<'a, K, V> {
    tree: &'a RawRedBlackTree<K, V>,
    cursor: InorderCursor,
    remaining: usize,
}

/// An iterator over the keys of a `RedBlackTree`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`RedBlackTree`].
///
/// [`keys`]: RedBlackTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Inorder<'a, K, V>,
}

/// An iterator over the values of a `RedBlackTree`, in key order.
///
/// This `struct` is created by the [`values`] method on [`RedBlackTree`].
///
/// [`values`]: RedBlackTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Inorder<'a, K, V>,
}

/// An owning iterator over the entries of a `RedBlackTree`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`RedBlackTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use beni_tree::RedBlackTree;
///
/// let tree = RedBlackTree::from([(2, "b"), (1, "a")]);
/// let mut iter = tree.into_iter();
/// assert_eq!(iter.next(), Some((1, "a")));
/// assert_eq!(iter.next_back(), Some((2, "b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> RedBlackTree<K, V> {
    /// Makes a new, empty `RedBlackTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    ///
    /// // entries can now be inserted into the empty tree
    /// tree.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> RedBlackTree<K, V> {
        RedBlackTree {
            raw: RawRedBlackTree::new(),
        }
    }

    /// Clears the tree, removing all entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut a = RedBlackTree::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut a = RedBlackTree::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut a = RedBlackTree::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.search(&1), Some(&"a"));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "a");
    /// if let Some(x) = tree.search_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(tree[&1], "b");
    /// ```
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// Useful for getting the stored `&K` back from a borrowed `&Q` lookup key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([(String::from("one"), 1)]);
    /// assert_eq!(tree.search_key_value("one"), Some((&String::from("one"), &1)));
    /// assert_eq!(tree.search_key_value("two"), None);
    /// ```
    pub fn search_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the tree contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([(1, "a")]);
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).is_some()
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.first_key_value(), None);
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// assert_eq!(tree.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|id| {
            let node = self.raw.node(id);
            (&node.key, &node.value)
        })
    }

    /// Returns the entry with the largest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.last_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|id| {
            let node = self.raw.node(id);
            (&node.key, &node.value)
        })
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` if the entry was inserted. If the tree already holds the key, nothing
    /// changes, the stored value is kept and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(37, "a"));
    /// assert!(!tree.insert(37, "b"));
    /// assert_eq!(tree[&37], "a");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        self.raw.insert(key, value).is_ok()
    }

    /// Inserts a key-value pair if the key is not already present, returning a mutable
    /// reference to the newly stored value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already present. The tree is unchanged and
    /// `key` and `value` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// *tree.try_insert(5, 10).unwrap() += 1;
    /// assert_eq!(tree.try_insert(5, 0), Err(Error::DuplicateKey));
    /// assert_eq!(tree[&5], 11);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, Error>
    where
        K: Ord,
    {
        let id = self.raw.insert(key, value)?;
        Ok(&mut self.raw.node_mut(id).value)
    }

    /// Removes a key from the tree, returning `true` if the key was present.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "a");
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).is_ok()
    }

    /// Removes a key from the tree, returning the stored key and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "a");
    /// assert_eq!(tree.remove_entry(&1), Ok((1, "a")));
    /// assert_eq!(tree.remove_entry(&1), Err(Error::KeyNotFound));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), Error>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// The walk only borrows the tree, so it can be restarted at any time.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3, "c");
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// for (key, value) in tree.inorder() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = tree.inorder().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create, O(n) to walk in full.
    pub fn inorder(&self) -> Inorder<'_, K, V> {
        Inorder {
            tree: &self.raw,
            cursor: InorderCursor::new(&self.raw),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = tree.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.inorder() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = tree.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.inorder() }
    }

    /// Returns a read-only view of the root node, or `None` if the tree is empty.
    ///
    /// From the root every node can be reached through [`NodeRef::left`] and
    /// [`NodeRef::right`], along with its color. This is the surface pretty-printers and
    /// structural checks are written against.
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::{Color, RedBlackTree};
    ///
    /// let tree = RedBlackTree::from([(1, ()), (2, ()), (3, ())]);
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.key(), 2);
    /// assert_eq!(root.color(), Color::Black);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(1));
    /// assert_eq!(root.right().map(|n| n.color()), Some(Color::Red));
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.raw.root().map(|id| NodeRef::new(&self.raw, id))
    }

    /// Returns the black-height of the root: the number of black nodes on any path from the
    /// root down to an empty leaf, not counting the root. An empty tree reports `0`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use beni_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = (1..=7).map(|k| (k, ())).collect();
    /// assert_eq!(tree.black_height(), 1);
    ///
    /// let empty: RedBlackTree<i32, ()> = RedBlackTree::new();
    /// assert_eq!(empty.black_height(), 0);
    /// ```
    #[must_use]
    pub fn black_height(&self) -> usize {
        self.raw.root().map_or(0, |root| self.raw.black_height(root))
    }
}

impl<K: Clone, V: Clone> Clone for RedBlackTree<K, V> {
    fn clone(&self) -> Self {
        RedBlackTree {
            raw: self.raw.clone(),
        }
    }
}

impl<K: Hash, V: Hash> Hash for RedBlackTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.inorder().zip(other.inorder()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inorder()).finish()
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        RedBlackTree::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

/// Keys that are already present keep their first value.
impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Inorder<'a, K, V>;

    fn into_iter(self) -> Inorder<'a, K, V> {
        self.inorder()
    }
}

impl<K, V> IntoIterator for RedBlackTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the tree, sorted by key.
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for RedBlackTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the tree.
    fn index(&self, key: &Q) -> &V {
        self.search(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RedBlackTree<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.advance(self.tree)?;
        self.remaining -= 1;
        let node = self.tree.node(id);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Inorder<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Inorder<'_, K, V> {}

impl<K, V> Clone for Inorder<'_, K, V> {
    fn clone(&self) -> Self {
        Inorder {
            tree: self.tree,
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Inorder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `red_black_tree::IntoIter`.
    ///
    /// ```
    /// # use beni_tree::red_black_tree;
    /// let iter: red_black_tree::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}
