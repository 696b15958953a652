use thiserror::Error;

/// Why a [`RedBlackTree`](crate::RedBlackTree) mutation was refused.
///
/// Both conditions are recoverable: the tree is left exactly as it was before the call.
///
/// # Examples
///
/// ```
/// use beni_tree::{Error, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// assert!(tree.try_insert(5, "five").is_ok());
/// assert_eq!(tree.try_insert(5, "cinq"), Err(Error::DuplicateKey));
/// assert_eq!(tree.remove_entry(&6), Err(Error::KeyNotFound));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The key is already present; the existing entry was kept.
    #[error("key is already present in the tree")]
    DuplicateKey,

    /// No entry with the key exists.
    #[error("key was not found in the tree")]
    KeyNotFound,
}
