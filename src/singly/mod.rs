use std::fmt::{self, Debug, Formatter};

use crate::node::{Arena, Link, NodeId, SinglyNode};
use crate::singly::iterator::{Iter, IterMut};
use crate::{Error, Result};

pub mod iterator;

mod algorithms;

/// The `SinglyLinkedList` is a forward-only linked list with owned nodes.
/// It appends elements in constant time. Accessing, inserting or removing
/// elements at any other position takes *O*(*n*) time, removing the last
/// element included.
///
/// The `SinglyLinkedList` contains:
/// - an arena `nodes` owning every node of the list;
/// - the handles `head` and `tail` of the first and last nodes;
/// - a length field `len` indicating the length of the list.
///
/// Indices are non-negative: a negative index is out of range for
/// [`get`](SinglyLinkedList::get) and [`pop_at`](SinglyLinkedList::pop_at),
/// and means "the front" for [`insert`](SinglyLinkedList::insert).
pub struct SinglyLinkedList<T> {
    pub(crate) nodes: Arena<SinglyNode<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    /// the length of the list
    pub(crate) len: usize,
}

// private methods
impl<T> SinglyLinkedList<T> {
    /// Follows `at` forward links from the head, or returns `None` if the
    /// chain ends before that.
    pub(crate) fn node_at(&self, at: usize) -> Link {
        let mut current = self.head;
        for _ in 0..at {
            current = self.nodes[current?].next;
        }
        current
    }

    /// Returns the node at `index`, which must lie in `0..len`.
    fn checked_node(&self, index: isize) -> Result<NodeId> {
        usize::try_from(index)
            .ok()
            .filter(|&at| at < self.len)
            .and_then(|at| self.node_at(at))
            .ok_or_else(|| {
                debug!(index, len = self.len, "singly linked list index out of range");
                Error::out_of_range(index, self.len)
            })
    }

    /// Links a new node holding `elt` right after `prev`.
    fn attach_after(&mut self, prev: NodeId, elt: T) {
        let next = self.nodes[prev].next;
        let node = self.nodes.alloc(SinglyNode::new(elt, next));
        self.nodes[prev].next = Some(node);
        if next.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Unlinks the node following `prev` and returns its element, or `None`
    /// if `prev` is the tail.
    fn detach_after(&mut self, prev: NodeId) -> Option<T> {
        let node = self.nodes[prev].next?;
        let next = self.nodes[node].next;
        self.nodes[prev].next = next;
        if next.is_none() {
            self.tail = Some(prev);
        }
        Some(self.release(node))
    }

    /// Frees an already unlinked node.
    fn release(&mut self, node: NodeId) -> T {
        let element = self.nodes.free(node).into_element();
        self.len -= 1;
        if self.len == 0 {
            // Every slot is vacant by now.
            self.nodes.clear();
        }
        element
    }

    /// Removes the element at position `at`, or returns `None` if `at >= len`.
    pub(crate) fn remove_at(&mut self, at: usize) -> Option<T> {
        if at >= self.len {
            return None;
        }
        if at == 0 {
            return self.pop_front();
        }
        let prev = self.node_at(at - 1)?;
        trace!(at, len = self.len, "detach node from singly linked list");
        self.detach_after(prev)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty `SinglyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `SinglyLinkedList` with room for at least `capacity`
    /// nodes before reallocating. The list still grows beyond that.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](SinglyLinkedList::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the dimensions of the list, which is always `(len,)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from(['a', 'b']);
    /// assert_eq!(list.shape(), (2,));
    /// ```
    #[inline]
    pub fn shape(&self) -> (usize,) {
        (self.len,)
    }

    /// Removes all elements from the list.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is negative or not less
    /// than the length.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(2), Ok(&3));
    /// assert!(list.get(3).is_err());
    /// assert!(list.get(-1).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let node = self.checked_node(index)?;
        Ok(&self.nodes[node].element)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](SinglyLinkedList::get).
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let node = self.checked_node(index)?;
        Ok(&mut self.nodes[node].element)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| &self.nodes[node].element)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let node = self.head?;
        Some(&mut self.nodes[node].element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| &self.nodes[node].element)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let node = self.tail?;
        Some(&mut self.nodes[node].element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        let node = self.nodes.alloc(SinglyNode::new(elt, self.head));
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        self.head = self.nodes[node].next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(self.release(node))
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.back(), Some(&2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn append(&mut self, elt: T) {
        let node = self.nodes.alloc(SinglyNode::new(elt, None));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Same as [`append`](SinglyLinkedList::append).
    #[inline]
    pub fn push_back(&mut self, elt: T) {
        self.append(elt)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since the node before
    /// the last one must be found.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.remove_at(len - 1),
        }
    }

    /// Inserts an element so that it ends up at position `index`.
    ///
    /// There is no negative indexing: if `index <= 0` the element is inserted
    /// at the front, and if `index >= len` it is appended to the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(0, 'a');
    /// list.insert(5, 'b');
    /// list.insert(1, 'c');
    /// list.insert(-3, 'd');
    /// assert_eq!(list.to_vec(), vec!['d', 'a', 'c', 'b']);
    /// ```
    pub fn insert(&mut self, index: isize, elt: T) {
        match usize::try_from(index) {
            Err(_) | Ok(0) => self.push_front(elt),
            Ok(at) if at >= self.len => self.append(elt),
            Ok(at) => match self.node_at(at - 1) {
                Some(prev) => {
                    trace!(at, len = self.len, "splice node into singly linked list");
                    self.attach_after(prev, elt)
                }
                None => self.append(elt),
            },
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{Error, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop(), Ok(2));
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.pop(), Err(Error::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.pop_back().ok_or_else(|| {
            debug!("pop from empty singly linked list");
            Error::Empty
        })
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty, and
    /// [`Error::IndexOutOfRange`] if `index` is negative or not less than the
    /// length.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.pop_at(1), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert!(list.pop_at(2).is_err());
    /// ```
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        if self.is_empty() {
            debug!(index, "pop from empty singly linked list");
            return Err(Error::Empty);
        }
        let len = self.len;
        usize::try_from(index)
            .ok()
            .and_then(|at| self.remove_at(at))
            .ok_or_else(|| {
                debug!(index, len, "singly linked list pop index out of range");
                Error::out_of_range(index, len)
            })
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([0, 1, 2]);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::convert::display_sequence(f, self.iter())
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
