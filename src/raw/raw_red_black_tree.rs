use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::{Color, Error};

use super::arena::Arena;
use super::node::{Node, Side};
use super::node_id::NodeId;

/// The red-black tree engine backing `RedBlackTree`.
#[derive(Clone)]
pub(crate) struct RawRedBlackTree<K, V> {
    /// Arena storing all tree nodes; links between them are `NodeId`s.
    nodes: Arena<Node<K, V>>,
    /// The root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Number of entries reachable from `root`.
    len: usize,
}

/// Outcome of a key descent.
pub(crate) enum SearchResult {
    /// The key is stored in this node.
    Found(NodeId),
    /// The key is absent. Holds the parent and side a new node would be linked under, or `None`
    /// when the tree is empty.
    Vacant(Option<(NodeId, Side)>),
}

/// One step of the double-black fixup, listed in the order the cases are tested.
///
/// `side` is the side of the parent the double-black position hangs from; the near nephew is the
/// sibling's child on that same side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RemoveCase {
    /// Case 0: the position holds a red node, which absorbs the extra black.
    RedNode(NodeId),
    /// Case 1: the sibling is red.
    RedSibling { parent: NodeId, side: Side, sibling: NodeId },
    /// Case 2: the sibling and both of its children are black.
    BlackNephews { parent: NodeId, sibling: NodeId },
    /// Case 3: the sibling is black, its far child black and its near child red.
    NearNephewRed { side: Side, sibling: NodeId, near: NodeId },
    /// Case 4: the sibling is black and its far child is red.
    FarNephewRed { parent: NodeId, side: Side, sibling: NodeId, far: NodeId },
}

/// Explicit-stack in-order walk over node ids.
///
/// Holds no borrow of the tree; every step is handed the tree it walks.
#[derive(Clone)]
pub(crate) struct InorderCursor {
    stack: SmallVec<[NodeId; 32]>,
}

impl InorderCursor {
    pub(crate) fn new<K, V>(tree: &RawRedBlackTree<K, V>) -> Self {
        let mut cursor = Self::empty();
        cursor.descend_left(tree, tree.root);
        cursor
    }

    fn empty() -> Self {
        Self { stack: SmallVec::new() }
    }

    fn descend_left<K, V>(&mut self, tree: &RawRedBlackTree<K, V>, mut from: Option<NodeId>) {
        while let Some(id) = from {
            self.stack.push(id);
            from = tree.nodes.get(id).left();
        }
    }

    /// Returns the next node in ascending key order.
    pub(crate) fn advance<K, V>(&mut self, tree: &RawRedBlackTree<K, V>) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.descend_left(tree, tree.nodes.get(id).right());
        Some(id)
    }
}

impl<K, V> RawRedBlackTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        debug!("clearing tree of {} entries", self.len);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.get_mut(id)
    }

    /// Removes every entry in ascending key order without any rebalancing.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = InorderCursor::new(self);
        while let Some(id) = cursor.advance(self) {
            order.push(id);
        }

        let entries = order.into_iter().map(|id| self.nodes.take(id).into_entry()).collect();
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        entries
    }

    // ─── Relationship queries ──────────────────────────────────────────────

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).parent()
    }

    pub(crate) fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(self.parent(id)?)
    }

    /// The grandparent's other child.
    pub(crate) fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.sibling(self.parent(id)?)
    }

    /// The parent's other child, or `None` if `id` is the root or is not linked from its parent.
    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(self.parent(id)?);
        let side = parent.side_of(id)?;
        parent.child(side.opposite())
    }

    fn side_of(&self, id: NodeId) -> Option<Side> {
        self.nodes.get(self.parent(id)?).side_of(id)
    }

    /// Color of a possibly absent node; absent leaves count as black.
    pub(crate) fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes.get(id).color)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color(id).is_red()
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes.get_mut(id).color = color;
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes.get(id).left() {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes.get(id).right() {
            id = right;
        }
        id
    }

    /// The node with the smallest key.
    pub(crate) fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The node with the largest key.
    pub(crate) fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Number of black nodes below `id` on any path down to an empty leaf, not counting `id`.
    pub(crate) fn black_height(&self, id: NodeId) -> usize {
        let mut height = 0;
        let mut current = self.nodes.get(id).left();
        while let Some(node) = current {
            if self.nodes.get(node).color.is_black() {
                height += 1;
            }
            current = self.nodes.get(node).left();
        }
        height
    }

    // ─── Rotations ─────────────────────────────────────────────────────────

    /// Moves `pivot` down to `side`, raising its child on the opposite side into its position.
    /// `Side::Left` is a left rotation (the right child rises) and `Side::Right` a right rotation.
    /// The raised child's inner subtree is handed over to `pivot`. Colors are left alone.
    fn rotate(&mut self, pivot: NodeId, side: Side) {
        let rising_side = side.opposite();
        let riser = self.nodes.get(pivot).child(rising_side);
        debug_assert!(riser.is_some(), "rotation of {pivot:?} needs a {rising_side:?} child");
        let Some(riser) = riser else {
            return;
        };
        trace!("rotating {pivot:?} {side:?}, raising {riser:?}");

        let inner = self.nodes.get(riser).child(side);
        self.nodes.get_mut(pivot).set_child(rising_side, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(pivot));
        }

        let parent = self.nodes.get(pivot).parent();
        self.nodes.get_mut(riser).set_parent(parent);
        self.replace_child(parent, pivot, Some(riser));

        self.nodes.get_mut(riser).set_child(side, Some(pivot));
        self.nodes.get_mut(pivot).set_parent(Some(riser));
    }

    /// Points whichever link referenced `old` (a parent slot, or the root) at `new`.
    /// Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        let Some(parent) = parent else {
            self.root = new;
            return;
        };

        let node = self.nodes.get_mut(parent);
        match node.side_of(old) {
            Some(side) => node.set_child(side, new),
            None => panic!("`RawRedBlackTree::replace_child()` - {old:?} is not a child of {parent:?}!"),
        }
    }

    // ─── Insertion fixup ───────────────────────────────────────────────────

    /// Restores the red-black properties after `node` was linked in as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(parent) = self.parent(node)
            && self.is_red(Some(parent))
        {
            // A red parent is never the root, so there is always a grandparent here.
            let Some(grandparent) = self.grandparent(node) else {
                break;
            };

            if let Some(uncle) = self.uncle(node)
                && self.is_red(Some(uncle))
            {
                trace!("insert fixup at {node:?}: red uncle {uncle:?}, pushing red up to {grandparent:?}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let Some(parent_side) = self.side_of(parent) else {
                break;
            };
            let (top, bottom) = if self.side_of(node) == Some(parent_side) {
                trace!("insert fixup at {node:?}: straight line under {grandparent:?}");
                (parent, node)
            } else {
                trace!("insert fixup at {node:?}: zig-zag under {grandparent:?}");
                self.rotate(parent, parent_side);
                (node, parent)
            };

            self.rotate(grandparent, parent_side.opposite());
            self.set_color(top, Color::Black);
            self.set_color(bottom, Color::Red);
            self.set_color(grandparent, Color::Red);
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    // ─── Removal ───────────────────────────────────────────────────────────

    /// Exchanges the entries of two nodes, leaving their colors and links in place.
    fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        let (a, b) = self.nodes.get_pair_mut(a, b);
        mem::swap(&mut a.key, &mut b.key);
        mem::swap(&mut a.value, &mut b.value);
    }

    /// Unlinks a node that has at most one child, promoting that child into its position.
    ///
    /// Returns the promoted child and the parent now above that position. The node itself stays
    /// allocated.
    fn splice_out(&mut self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = self.nodes.get(id);
        debug_assert!(!node.has_two_children(), "cannot splice out {id:?}: it has two children");

        let child = node.left().or(node.right());
        let parent = node.parent();
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(parent);
        }
        self.replace_child(parent, id, child);
        (child, parent)
    }

    /// Classifies the double-black position `x` under `parent`. `None` means there is nothing left
    /// to repair: `x` is a black root.
    fn remove_case(&self, x: Option<NodeId>, parent: Option<NodeId>) -> Option<RemoveCase> {
        if let Some(x) = x
            && self.nodes.get(x).color.is_red()
        {
            return Some(RemoveCase::RedNode(x));
        }

        let parent = parent?;
        let parent_node = self.nodes.get(parent);
        // `x` may be an empty leaf, so locate it by elimination. Its sibling is never empty
        // because that side carries at least one more black node than `x`'s side.
        let side = if parent_node.left() == x {
            Side::Left
        } else {
            Side::Right
        };
        let sibling = parent_node.child(side.opposite())?;

        if self.is_red(Some(sibling)) {
            return Some(RemoveCase::RedSibling { parent, side, sibling });
        }

        let sibling_node = self.nodes.get(sibling);
        let near = sibling_node.child(side).filter(|&id| self.nodes.get(id).color.is_red());
        let far = sibling_node.child(side.opposite()).filter(|&id| self.nodes.get(id).color.is_red());

        Some(match (near, far) {
            (None, None) => RemoveCase::BlackNephews { parent, sibling },
            (Some(near), None) => RemoveCase::NearNephewRed { side, sibling, near },
            (_, Some(far)) => RemoveCase::FarNephewRed {
                parent,
                side,
                sibling,
                far,
            },
        })
    }

    /// Eliminates the extra black carried by position `x` under `parent`.
    ///
    /// Every pass re-classifies from case 0, so case 1 continues into cases 2-4 at the same level,
    /// case 2 restarts one level up, and case 3 always ends in case 4.
    fn remove_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while let Some(case) = self.remove_case(x, parent) {
            trace!("remove fixup at {x:?} under {parent:?}: {case:?}");
            match case {
                RemoveCase::RedNode(node) => {
                    self.set_color(node, Color::Black);
                    break;
                }
                RemoveCase::RedSibling {
                    parent: above,
                    side,
                    sibling,
                } => {
                    self.set_color(sibling, Color::Black);
                    self.set_color(above, Color::Red);
                    self.rotate(above, side);
                }
                RemoveCase::BlackNephews { parent: above, sibling } => {
                    self.set_color(sibling, Color::Red);
                    x = Some(above);
                    parent = self.parent(above);
                }
                RemoveCase::NearNephewRed { side, sibling, near } => {
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                }
                RemoveCase::FarNephewRed {
                    parent: above,
                    side,
                    sibling,
                    far,
                } => {
                    let above_color = self.nodes.get(above).color;
                    self.set_color(sibling, above_color);
                    self.set_color(above, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(above, side);
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

impl<K: Ord, V> RawRedBlackTree<K, V> {
    /// Descends from the root looking for `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(mut current) = self.root else {
            return SearchResult::Vacant(None);
        };

        loop {
            let node = self.nodes.get(current);
            let side = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return SearchResult::Found(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return SearchResult::Vacant(Some((current, side))),
            }
        }
    }

    /// Returns the node holding `key`, if any.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            SearchResult::Found(id) => Some(id),
            SearchResult::Vacant(_) => None,
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|id| &self.nodes.get(id).value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.find(key)?;
        Some(&mut self.nodes.get_mut(id).value)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|id| {
            let node = self.nodes.get(id);
            (&node.key, &node.value)
        })
    }

    /// Inserts `key` if it is absent and rebalances.
    ///
    /// Returns the node now holding the entry. Rotations never move entries between nodes, so the
    /// id stays valid until the next removal.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Result<NodeId, Error> {
        let slot = match self.search(&key) {
            SearchResult::Found(existing) => {
                debug!("insert rejected: key already stored in {existing:?}");
                return Err(Error::DuplicateKey);
            }
            SearchResult::Vacant(slot) => slot,
        };

        let id = self.nodes.alloc(Node::new(key, value));
        self.link(id, slot);
        self.insert_fixup(id);
        debug_assert_eq!(self.nodes.len(), self.len);
        Ok(id)
    }

    fn link(&mut self, id: NodeId, slot: Option<(NodeId, Side)>) {
        match slot {
            None => self.root = Some(id),
            Some((parent, side)) => {
                self.nodes.get_mut(id).set_parent(Some(parent));
                self.nodes.get_mut(parent).set_child(side, Some(id));
            }
        }
        self.len += 1;
    }

    /// Removes `key` and rebalances, returning the stored entry.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Result<(K, V), Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(target) = self.find(key) else {
            debug!("remove rejected: key not found");
            return Err(Error::KeyNotFound);
        };

        // A node with two children hands its entry to its in-order successor's node, which has no
        // left child and is the one physically unlinked. The target keeps its own color.
        let target_node = self.nodes.get(target);
        let removed = match (target_node.left(), target_node.right()) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                self.swap_entries(target, successor);
                successor
            }
            _ => target,
        };

        let deleted_color = self.nodes.get(removed).color;
        let (child, parent) = self.splice_out(removed);
        let entry = self.nodes.take(removed).into_entry();
        self.len -= 1;

        match (deleted_color, child.map(|child| (child, self.nodes.get(child).color))) {
            (Color::Red, None | Some((_, Color::Red))) => {}
            (Color::Black, Some((child, Color::Red))) => self.set_color(child, Color::Black),
            (Color::Red, Some((child, Color::Black))) => {
                self.set_color(child, Color::Red);
                self.remove_fixup(Some(child), parent);
            }
            (Color::Black, None | Some((_, Color::Black))) => self.remove_fixup(child, parent),
        }

        debug_assert_eq!(self.nodes.len(), self.len);
        Ok(entry)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    use Color::{Black, Red};

    fn init_logging() {
        let _ = simplelog::TestLogger::init(log::LevelFilter::Debug, simplelog::Config::default());
    }

    impl<K: Ord + Clone + core::fmt::Debug, V> RawRedBlackTree<K, V> {
        /// Links a node of the given color by plain BST descent, with no rebalancing.
        ///
        /// Only for building fixtures: the caller is responsible for producing a valid tree.
        fn insert_with_color(&mut self, key: K, value: V, color: Color) -> NodeId {
            let SearchResult::Vacant(slot) = self.search(&key) else {
                panic!("fixture key {key:?} inserted twice");
            };
            let id = self.nodes.alloc(Node::with_color(key, value, color));
            self.link(id, slot);
            id
        }

        fn fixture(nodes: &[(K, Color)]) -> Self
        where
            V: Default,
        {
            let mut tree = Self::new();
            for (key, color) in nodes {
                tree.insert_with_color(key.clone(), V::default(), *color);
            }
            tree.validate_invariants();
            tree
        }

        /// Keys in order with their colors.
        fn colored_keys(&self) -> Vec<(K, Color)> {
            let mut cursor = InorderCursor::new(self);
            let mut out = Vec::new();
            while let Some(id) = cursor.advance(self) {
                let node = self.nodes.get(id);
                out.push((node.key.clone(), node.color));
            }
            out
        }

        /// Keys in order with their colors and parent keys.
        fn snapshot(&self) -> Vec<(K, Color, Option<K>)> {
            let mut cursor = InorderCursor::new(self);
            let mut out = Vec::new();
            while let Some(id) = cursor.advance(self) {
                let node = self.nodes.get(id);
                let parent = node.parent().map(|p| self.nodes.get(p).key.clone());
                out.push((node.key.clone(), node.color, parent));
            }
            out
        }

        fn root_key(&self) -> Option<K> {
            self.root.map(|id| self.nodes.get(id).key.clone())
        }

        fn id_of(&self, key: &K) -> NodeId {
            self.find(key).expect("fixture key present")
        }

        /// Checks BST order, parent links, the red-black color rules, uniform black-height and
        /// `len`. Panics with every violation found.
        fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            match self.root {
                None => {
                    if self.len != 0 {
                        errors.push(alloc::format!("empty tree has len {}", self.len));
                    }
                }
                Some(root) => {
                    if self.nodes.get(root).parent().is_some() {
                        errors.push(alloc::format!("root {root:?} has a parent"));
                    }
                    if self.nodes.get(root).color != Black {
                        errors.push(alloc::format!("root {root:?} is red"));
                    }
                    let mut count = 0;
                    self.validate_node(root, None, None, &mut count, &mut errors);
                    if count != self.len {
                        errors.push(alloc::format!("len is {} but {count} nodes are reachable", self.len));
                    }
                }
            }

            if self.nodes.len() != self.len {
                errors.push(alloc::format!("arena holds {} nodes, len is {}", self.nodes.len(), self.len));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns the number of black nodes from `id` down to any empty leaf, `id` included.
        fn validate_node(
            &self,
            id: NodeId,
            lower: Option<&K>,
            upper: Option<&K>,
            count: &mut usize,
            errors: &mut Vec<String>,
        ) -> usize {
            *count += 1;
            let node = self.nodes.get(id);

            if lower.is_some_and(|lower| node.key <= *lower) || upper.is_some_and(|upper| node.key >= *upper) {
                errors.push(alloc::format!("{id:?} key {:?} is outside ({lower:?}, {upper:?})", node.key));
            }

            let mut heights = [0; 2];
            for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
                let Some(child) = node.child(side) else {
                    continue;
                };
                let child_node = self.nodes.get(child);
                if child_node.parent() != Some(id) {
                    errors.push(alloc::format!("{child:?} parent is {:?}, expected {id:?}", child_node.parent()));
                }
                if node.color == Red && child_node.color == Red {
                    errors.push(alloc::format!("red {id:?} has red child {child:?}"));
                }
                let (lower, upper) = match side {
                    Side::Left => (lower, Some(&node.key)),
                    Side::Right => (Some(&node.key), upper),
                };
                heights[slot] = self.validate_node(child, lower, upper, count, errors);
            }

            if heights[0] != heights[1] {
                errors.push(alloc::format!("{id:?} black-heights differ: left {} right {}", heights[0], heights[1]));
            }
            heights[0] + usize::from(node.color == Black)
        }
    }

    type Tree = RawRedBlackTree<i32, ()>;

    // ─── Relationship queries and rotations ─────────────────────────────────

    #[test]
    fn relationship_queries() {
        //        10
        //      /    \
        //     5      20
        //    / \    /
        //   3   7  15
        let tree = Tree::fixture(&[(10, Black), (5, Red), (20, Black), (3, Black), (7, Black), (15, Red)]);
        let id = |key| tree.id_of(&key);

        assert_eq!(tree.parent(id(10)), None);
        assert_eq!(tree.grandparent(id(10)), None);
        assert_eq!(tree.uncle(id(10)), None);
        assert_eq!(tree.sibling(id(10)), None);

        assert_eq!(tree.parent(id(5)), Some(id(10)));
        assert_eq!(tree.grandparent(id(5)), None);
        assert_eq!(tree.uncle(id(5)), None);
        assert_eq!(tree.sibling(id(5)), Some(id(20)));

        assert_eq!(tree.grandparent(id(7)), Some(id(10)));
        assert_eq!(tree.uncle(id(7)), Some(id(20)));
        assert_eq!(tree.sibling(id(7)), Some(id(3)));
        assert_eq!(tree.uncle(id(15)), Some(id(5)));
        assert_eq!(tree.sibling(id(15)), None);
    }

    #[test]
    fn rotations_preserve_order_and_parent_links() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (15, Red), (25, Red)]);
        let before: Vec<i32> = tree.colored_keys().into_iter().map(|(k, _)| k).collect();

        tree.rotate(tree.id_of(&10), Side::Left);
        assert_eq!(tree.root_key(), Some(20));
        assert_eq!(
            tree.snapshot(),
            vec![
                (5, Black, Some(10)),
                (10, Black, Some(20)),
                (15, Red, Some(10)),
                (20, Black, None),
                (25, Red, Some(20)),
            ]
        );

        tree.rotate(tree.id_of(&20), Side::Right);
        assert_eq!(tree.root_key(), Some(10));
        assert_eq!(
            tree.snapshot(),
            vec![
                (5, Black, Some(10)),
                (10, Black, None),
                (15, Red, Some(20)),
                (20, Black, Some(10)),
                (25, Red, Some(20)),
            ]
        );
        let after: Vec<i32> = tree.colored_keys().into_iter().map(|(k, _)| k).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn rotation_below_the_root_reattaches_to_the_same_side() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (3, Red), (7, Red)]);
        tree.rotate(tree.id_of(&5), Side::Right);
        assert_eq!(tree.root_key(), Some(10));
        assert_eq!(tree.node(tree.root().unwrap()).left(), Some(tree.id_of(&3)));
        assert_eq!(tree.parent(tree.id_of(&5)), Some(tree.id_of(&3)));
        assert_eq!(tree.node(tree.id_of(&5)).right(), Some(tree.id_of(&7)));
    }

    // ─── Insertion cases ─────────────────────────────────────────────────────

    #[test]
    fn insert_straight_line_rotates_grandparent() {
        let mut tree = Tree::new();
        for key in [1, 2, 3] {
            tree.insert(key, ()).unwrap();
        }
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(2));
        assert_eq!(tree.colored_keys(), vec![(1, Red), (2, Black), (3, Red)]);
    }

    #[test]
    fn insert_zig_zag_rotates_parent_then_grandparent() {
        let mut tree = Tree::new();
        for key in [3, 1, 2] {
            tree.insert(key, ()).unwrap();
        }
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(2));
        assert_eq!(tree.colored_keys(), vec![(1, Red), (2, Black), (3, Red)]);
    }

    #[test]
    fn insert_red_uncle_recolors_and_climbs() {
        let mut tree = Tree::new();
        for key in [2, 1, 3, 4] {
            tree.insert(key, ()).unwrap();
        }
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(2));
        assert_eq!(tree.colored_keys(), vec![(1, Black), (2, Black), (3, Black), (4, Red)]);
    }

    #[test]
    fn insert_red_uncle_propagates_to_a_rotation_higher_up() {
        // Inserting 4 recolors 5/8 and makes 7 red under red 2's right subtree, forcing a
        // rotation at the root level.
        let mut tree = Tree::fixture(&[
            (11, Black),
            (2, Red),
            (14, Black),
            (1, Black),
            (7, Black),
            (15, Red),
            (5, Red),
            (8, Red),
        ]);
        tree.insert(4, ()).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(7));
        assert_eq!(
            tree.colored_keys(),
            vec![
                (1, Black),
                (2, Red),
                (4, Red),
                (5, Black),
                (7, Black),
                (8, Black),
                (11, Red),
                (14, Black),
                (15, Red),
            ]
        );
    }

    #[test]
    fn duplicate_insert_leaves_tree_untouched() {
        init_logging();
        let mut tree = Tree::new();
        for key in [13, 8, 17, 1, 11] {
            tree.insert(key, ()).unwrap();
        }
        let before = tree.snapshot();

        assert_eq!(tree.insert(8, ()), Err(Error::DuplicateKey));
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.snapshot(), before);
    }

    // ─── Removal cases ───────────────────────────────────────────────────────

    #[test]
    fn remove_red_leaf_needs_no_fixup() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (15, Red)]);
        tree.remove(&15).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.colored_keys(), vec![(5, Black), (10, Black), (20, Black)]);
    }

    #[test]
    fn remove_black_with_red_child_recolors_child() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (3, Red)]);
        tree.remove(&5).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.snapshot(), vec![(3, Black, Some(10)), (10, Black, None), (20, Black, Some(10))]);
    }

    #[test]
    fn remove_case_two_stops_at_black_root() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black)]);
        let parent = tree.id_of(&10);
        // Classify as if 5 were already unlinked.
        let mut probe = tree.clone();
        probe.splice_out(probe.id_of(&5));
        assert_eq!(
            probe.remove_case(None, Some(parent)),
            Some(RemoveCase::BlackNephews {
                parent,
                sibling: tree.id_of(&20)
            })
        );

        tree.remove(&5).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.colored_keys(), vec![(10, Black), (20, Red)]);
    }

    #[test]
    fn remove_case_two_then_case_zero_at_red_parent() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Red), (20, Black), (3, Black), (7, Black)]);
        tree.remove(&3).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.colored_keys(), vec![(5, Black), (7, Red), (10, Black), (20, Black)]);
    }

    #[test]
    fn remove_case_one_rotates_red_sibling_then_continues() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Red), (15, Black), (25, Black)]);
        let mut probe = tree.clone();
        probe.splice_out(probe.id_of(&5));
        assert_eq!(
            probe.remove_case(None, Some(tree.id_of(&10))),
            Some(RemoveCase::RedSibling {
                parent: tree.id_of(&10),
                side: Side::Left,
                sibling: tree.id_of(&20)
            })
        );

        tree.remove(&5).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(20));
        assert_eq!(tree.colored_keys(), vec![(10, Black), (15, Red), (20, Black), (25, Black)]);
    }

    #[test]
    fn remove_case_three_falls_into_case_four() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (15, Red)]);
        let mut probe = tree.clone();
        probe.splice_out(probe.id_of(&5));
        assert_eq!(
            probe.remove_case(None, Some(tree.id_of(&10))),
            Some(RemoveCase::NearNephewRed {
                side: Side::Left,
                sibling: tree.id_of(&20),
                near: tree.id_of(&15)
            })
        );

        tree.remove(&5).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(15));
        assert_eq!(tree.colored_keys(), vec![(10, Black), (15, Black), (20, Black)]);
    }

    #[test]
    fn remove_case_four_resolves_in_one_rotation() {
        let mut tree = Tree::fixture(&[(10, Black), (5, Black), (20, Black), (25, Red)]);
        let mut probe = tree.clone();
        probe.splice_out(probe.id_of(&5));
        assert_eq!(
            probe.remove_case(None, Some(tree.id_of(&10))),
            Some(RemoveCase::FarNephewRed {
                parent: tree.id_of(&10),
                side: Side::Left,
                sibling: tree.id_of(&20),
                far: tree.id_of(&25)
            })
        );

        tree.remove(&5).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(20));
        assert_eq!(tree.colored_keys(), vec![(10, Black), (20, Black), (25, Black)]);
    }

    #[test]
    fn remove_mirrored_cases_on_the_right() {
        // Mirror of case 1: x on the right, red sibling on the left.
        let mut tree = Tree::fixture(&[(20, Black), (25, Black), (10, Red), (5, Black), (15, Black)]);
        tree.remove(&25).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(10));
        assert_eq!(tree.colored_keys(), vec![(5, Black), (10, Black), (15, Red), (20, Black)]);

        // Mirror of case 3.
        let mut tree = Tree::fixture(&[(20, Black), (25, Black), (10, Black), (15, Red)]);
        tree.remove(&25).unwrap();
        tree.validate_invariants();
        assert_eq!(tree.root_key(), Some(15));
    }

    #[test]
    fn remove_two_children_moves_successor_entry() {
        let mut tree: RawRedBlackTree<i32, &str> = RawRedBlackTree::new();
        for (key, value) in [(7, "g"), (3, "c"), (18, "r"), (10, "j"), (22, "v"), (8, "h"), (11, "k"), (26, "z")] {
            tree.insert(key, value).unwrap();
        }
        tree.validate_invariants();

        assert_eq!(tree.remove(&18), Ok((18, "r")));
        tree.validate_invariants();
        assert_eq!(tree.get(&22), Some(&"v"));
        assert_eq!(tree.get(&18), None);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn remove_missing_key_leaves_tree_untouched() {
        init_logging();
        let mut tree = Tree::new();
        assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));

        for key in [5, 2, 8] {
            tree.insert(key, ()).unwrap();
        }
        let before = tree.snapshot();
        assert_eq!(tree.remove(&6), Err(Error::KeyNotFound));
        assert_eq!(tree.snapshot(), before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn remove_last_node_empties_tree() {
        let mut tree = Tree::new();
        tree.insert(1, ()).unwrap();
        tree.remove(&1).unwrap();
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn removed_slots_are_recycled() {
        let mut tree = Tree::new();
        for key in 0..64 {
            tree.insert(key, ()).unwrap();
        }
        for key in 0..32 {
            tree.remove(&key).unwrap();
        }
        for key in 100..132 {
            tree.insert(key, ()).unwrap();
        }
        tree.validate_invariants();
        assert_eq!(tree.nodes.slot_count(), 64);
    }

    #[test]
    fn drain_yields_entries_in_order_and_empties_tree() {
        let mut tree: RawRedBlackTree<i32, i32> = RawRedBlackTree::new();
        for key in [5, 1, 9, 3, 7] {
            tree.insert(key, key * 10).unwrap();
        }
        assert_eq!(tree.drain_to_vec(), vec![(1, 10), (3, 30), (5, 50), (7, 70), (9, 90)]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn black_height_counts_below_the_node() {
        let tree = Tree::fixture(&[(10, Black), (5, Red), (20, Black), (3, Black), (7, Black)]);
        assert_eq!(tree.black_height(tree.id_of(&10)), 1);
        assert_eq!(tree.black_height(tree.id_of(&5)), 1);
        assert_eq!(tree.black_height(tree.id_of(&3)), 0);
        assert_eq!(tree.black_height(tree.id_of(&20)), 0);
    }

    // ─── Exhaustive small trees ──────────────────────────────────────────────

    fn permutations(n: i32) -> Vec<Vec<i32>> {
        if n == 0 {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for rest in permutations(n - 1) {
            for at in 0..=rest.len() {
                let mut order = rest.clone();
                order.insert(at, n);
                out.push(order);
            }
        }
        out
    }

    #[test]
    fn every_single_removal_from_every_small_tree() {
        for n in 1..=7 {
            let expected: Vec<i32> = (1..=n).collect();
            for order in permutations(n) {
                let mut tree = Tree::new();
                for &key in &order {
                    tree.insert(key, ()).unwrap();
                }
                tree.validate_invariants();

                for &key in &expected {
                    let mut pruned = tree.clone();
                    pruned.remove(&key).unwrap();
                    pruned.validate_invariants();
                    let keys: Vec<i32> = pruned.colored_keys().into_iter().map(|(k, _)| k).collect();
                    let mut remaining = expected.clone();
                    remaining.retain(|&k| k != key);
                    assert_eq!(keys, remaining, "insert order {order:?}, removed {key}");
                }
            }
        }
    }

    #[test]
    fn every_insertion_order_of_eight_keys_drains_cleanly() {
        for order in permutations(8) {
            let mut tree = Tree::new();
            for &key in &order {
                tree.insert(key, ()).unwrap();
            }
            tree.validate_invariants();

            // Removing in insertion order visits roots, leaves and two-child nodes alike.
            for (removed, &key) in order.iter().enumerate() {
                assert_eq!(tree.remove(&key), Ok((key, ())), "insert order {order:?}");
                tree.validate_invariants();
                assert_eq!(tree.len(), order.len() - removed - 1);
            }
        }
    }

    // ─── Randomized model test ───────────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..1000).prop_map(Op::Insert),
            2 => (0i32..1000).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn tree_invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawRedBlackTree<i32, i32> = RawRedBlackTree::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        let inserted = tree.insert(key, -key).is_ok();
                        let absent = !model.contains_key(&key);
                        if absent {
                            model.insert(key, -key);
                        }
                        prop_assert_eq!(inserted, absent);
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove(&key).ok(), model.remove(&key).map(|v| (key, v)));
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }

            let mut cursor = InorderCursor::new(&tree);
            let mut walked = Vec::new();
            while let Some(id) = cursor.advance(&tree) {
                let node = tree.node(id);
                walked.push((node.key, node.value));
            }
            let expected: Vec<(i32, i32)> = model.into_iter().collect();
            prop_assert_eq!(walked, expected);
        }
    }
}
