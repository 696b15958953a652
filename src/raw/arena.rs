use alloc::vec::Vec;
use core::mem;

use super::node_id::NodeId;

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    // Vacant slots form a singly linked free list threaded through the vector.
    Vacant { next_free: Option<NodeId> },
}

/// Slot storage for tree nodes.
///
/// Ids stay valid until the element is taken; taken slots are recycled most-recently-freed first.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(id) = self.free_head {
            let slot = mem::replace(&mut self.slots[id.index()], Slot::Occupied(element));
            match slot {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => panic!("`Arena::alloc()` - free list points at an occupied slot!"),
            }
            self.len += 1;
            return id;
        }

        assert!(
            self.slots.len() <= NodeId::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            NodeId::MAX + 1
        );
        self.slots.push(Slot::Occupied(element));
        self.len += 1;
        NodeId::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        match &self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get()` - `id` {id:?} is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get_mut()` - `id` {id:?} is vacant!"),
        }
    }

    /// Returns mutable references to two distinct elements at once.
    pub(crate) fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        match self.slots.get_disjoint_mut([a.index(), b.index()]) {
            Ok([Slot::Occupied(first), Slot::Occupied(second)]) => (first, second),
            Ok(_) => panic!("`Arena::get_pair_mut()` - {a:?} or {b:?} is vacant!"),
            Err(_) => panic!("`Arena::get_pair_mut()` - {a:?} and {b:?} must be distinct and in bounds!"),
        }
    }

    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match mem::replace(&mut self.slots[id.index()], vacant) {
            Slot::Occupied(element) => {
                self.free_head = Some(id);
                self.len -= 1;
                element
            }
            Slot::Vacant { next_free } => {
                // Undo the write so the free list stays intact before reporting the bug.
                self.slots[id.index()] = Slot::Vacant { next_free };
                panic!("`Arena::take()` - `id` {id:?} is already vacant!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Occupied plus vacant slots.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
