use core::fmt;
use core::num::NonZero;

#[cfg(test)]
type RawNodeId = u16;
#[cfg(not(test))]
type RawNodeId = u32;

/// Index of a node slot in the tree's arena.
///
/// Stored off-by-one in a `NonZero` so that `Option<NodeId>`, the type of every child and parent
/// link, costs no more than the id itself.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<RawNodeId>);

impl NodeId {
    /// The largest slot index an arena may hand out.
    pub(crate) const MAX: usize = (RawNodeId::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // `index + 1` is non-zero and fits because `index <= RawNodeId::MAX - 1`.
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as RawNodeId;
        match NonZero::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Links are `Option<NodeId>`; they must not grow past the raw index.
    assert_eq_size!(NodeId, Option<NodeId>);
    assert_eq_size!(NodeId, RawNodeId);

    #[test]
    #[should_panic(expected = "`NodeId::from_index()` - `index` > `NodeId::MAX`!")]
    fn index_past_max_panics() {
        let _ = NodeId::from_index(NodeId::MAX + 1);
    }

    #[test]
    fn debug_shows_slot_index() {
        assert_eq!(alloc::format!("{:?}", NodeId::from_index(7)), "#7");
    }

    proptest! {
        #[test]
        fn index_survives_encoding(index in 0..=NodeId::MAX) {
            prop_assert_eq!(NodeId::from_index(index).index(), index);
        }
    }
}
