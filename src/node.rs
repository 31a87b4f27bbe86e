//! Node storage shared by both list variants.
//!
//! Every list owns an [`Arena`] of slots. A node lives in an occupied slot and
//! refers to its neighbours by [`NodeId`] handles instead of pointers, so the
//! `prev`/`next` pair of a doubly linked list never forms an ownership cycle.
//!
//! ```text
//!   slots:  ┌──────────────┬──────────────┬──────────────┬──────────────┐
//!           │ Occupied(b)  │ Vacant(None) │ Occupied(a)  │ Vacant(1)    │
//!           └──────────────┴──────────────┴──────────────┴──────────────┘
//!   free:   3 ──→ 1 ──→ None
//!   chain:  head = 2 (a) ──→ 0 (b) ──→ None
//! ```
//!
//! Removed slots are pushed to the front of the free chain and reused by the
//! next insertion.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

/// A handle to an occupied slot of an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An optional link to a neighbour node; `None` marks the end of the chain.
pub(crate) type Link = Option<NodeId>;

/// A node holding one element.
///
/// `B` is the back-link. The doubly linked list uses [`Link`]; the singly
/// linked list uses `()`, so its nodes carry no backward link at all.
#[derive(Debug)]
pub(crate) struct Node<T, B> {
    pub(crate) element: T,
    pub(crate) next: Link,
    pub(crate) prev: B,
}

pub(crate) type SinglyNode<T> = Node<T, ()>;

pub(crate) type DoublyNode<T> = Node<T, Link>;

impl<T> SinglyNode<T> {
    pub(crate) fn new(element: T, next: Link) -> Self {
        Node {
            element,
            next,
            prev: (),
        }
    }
}

impl<T> DoublyNode<T> {
    pub(crate) fn new(element: T, prev: Link, next: Link) -> Self {
        Node {
            element,
            next,
            prev,
        }
    }
}

impl<T, B> Node<T, B> {
    pub(crate) fn into_element(self) -> T {
        self.element
    }
}

pub(crate) enum Slot<N> {
    Occupied(N),
    /// A free slot, linked to the next free slot.
    Vacant(Link),
}

/// Slot storage owning every node of one list.
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Link,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node` in a free slot (or a new one) and returns its handle.
    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.0];
                self.free = match *slot {
                    Slot::Vacant(next_free) => next_free,
                    Slot::Occupied(_) => {
                        unreachable!("free chain points to an occupied slot {:?}", id)
                    }
                };
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Takes the node out of slot `id`, and puts the slot on the free chain.
    ///
    /// # Panics
    ///
    /// Panics if the slot `id` is vacant.
    pub(crate) fn free(&mut self, id: NodeId) -> N {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant(_) => panic!("double free of node {:?}", id),
        }
    }

    /// Drops every node and releases all slots (the capacity is kept).
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Returns a raw pointer to the slots, for iterators that hand out
    /// mutable references to several distinct nodes at once.
    pub(crate) fn slots_ptr(&mut self) -> NonNull<Slot<N>> {
        // `as_mut_ptr` is never null, even for an empty vector.
        NonNull::new(self.slots.as_mut_ptr()).unwrap_or_else(NonNull::dangling)
    }
}

/// Dereferences the node `id` through a pointer from [`Arena::slots_ptr`].
///
/// # Safety
///
/// `slots` must come from an arena that is still alive and has not been
/// reallocated since, `id` must be occupied in it, and no other reference to
/// the same node may be alive for `'a`.
pub(crate) unsafe fn node_mut<'a, N>(slots: NonNull<Slot<N>>, id: NodeId) -> &'a mut N {
    match &mut *slots.as_ptr().add(id.0) {
        Slot::Occupied(node) => node,
        Slot::Vacant(_) => unreachable!("dangling link to node {:?}", id),
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling link to node {:?}", id),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling link to node {:?}", id),
        }
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, SinglyNode};
    use std::cell::RefCell;

    #[test]
    fn arena_reuses_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(SinglyNode::new('a', None));
        let b = arena.alloc(SinglyNode::new('b', Some(a)));
        let c = arena.alloc(SinglyNode::new('c', Some(b)));
        assert_eq!(arena[b].next, Some(a));

        assert_eq!(arena.free(b).into_element(), 'b');
        assert_eq!(arena.free(a).into_element(), 'a');

        // Most recently freed slot first.
        assert_eq!(arena.alloc(SinglyNode::new('d', None)), a);
        assert_eq!(arena.alloc(SinglyNode::new('e', None)), b);
        assert_eq!(arena[c].element, 'c');
        assert_eq!(arena[a].element, 'd');
        assert_eq!(arena[b].element, 'e');
    }

    #[test]
    #[should_panic(expected = "double free")]
    fn arena_double_free() {
        let mut arena = Arena::new();
        let a = arena.alloc(SinglyNode::new(1, None));
        arena.free(a);
        arena.free(a);
    }

    #[test]
    #[should_panic(expected = "dangling link")]
    fn arena_dangling_index() {
        let mut arena = Arena::new();
        let a = arena.alloc(SinglyNode::new(1, None));
        arena.free(a);
        let _ = &arena[a];
    }

    #[test]
    fn arena_clear_drops_nodes() {
        struct DropChecker<'a>(i32, &'a RefCell<Vec<i32>>);
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut arena = Arena::with_capacity(4);
        let a = arena.alloc(SinglyNode::new(DropChecker(1, &dropped), None));
        arena.alloc(SinglyNode::new(DropChecker(2, &dropped), Some(a)));
        arena.clear();
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
        assert!(arena.capacity() >= 4);
    }
}
