use std::fmt::{self, Debug, Formatter};

use crate::doubly::iterator::{Iter, IterMut};
use crate::node::{Arena, DoublyNode, Link, NodeId};
use crate::{Error, Result};

pub mod iterator;

mod algorithms;

/// The `DoublyLinkedList` is a bidirectional linked list with owned nodes.
/// It inserts and removes elements at both ends in constant time. Accessing,
/// inserting or removing elements at any other position takes *O*(*n*) time.
///
/// The `DoublyLinkedList` contains:
/// - an arena `nodes` owning every node of the list;
/// - the handles `head` and `tail` of the first and last nodes;
/// - a length field `len` indicating the length of the list.
///
/// Every node links to both of its neighbours, so for every pair of adjacent
/// nodes `a` and `b`, `a.next == b` and `b.prev == a`. The `prev` of `head`
/// and the `next` of `tail` are `None`.
///
/// # Negative Indexing
///
/// Indices in `-len..0` count from the end of the list, `-1` being the last
/// element. They are resolved by walking backward from `tail`, while
/// non-negative indices walk forward from `head`.
///
/// ```
/// use linked_lists::DoublyLinkedList;
///
/// let list = DoublyLinkedList::from([10, 20, 30]);
/// assert_eq!(list.get(-1), Ok(&30));
/// assert_eq!(list.get(-3), Ok(&10));
/// assert!(list.get(-4).is_err());
/// assert!(list.get(3).is_err());
/// ```
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Arena<DoublyNode<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    /// the length of the list
    pub(crate) len: usize,
}

// private methods
impl<T> DoublyLinkedList<T> {
    /// Links `prev` and `next` to each other. A `None` on either side makes
    /// the other one the new `head` or `tail`.
    fn connect(&mut self, prev: Link, next: Link) {
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attach a new node holding `elt` between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent (checked only in
    /// `#[cfg(debug_assertions)]`), otherwise the nodes in between are
    /// leaked from the chain and the list becomes ill-formed.
    fn attach_node(&mut self, prev: Link, next: Link, elt: T) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.alloc(DoublyNode::new(elt, prev, next));
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
        node
    }

    /// Detach the node `node` from the list, and return its element.
    fn detach_node(&mut self, node: NodeId) -> T {
        let node = self.nodes.free(node);
        self.connect(node.prev, node.next);
        self.len -= 1;
        if self.len == 0 {
            // Every slot is vacant by now.
            self.nodes.clear();
        }
        node.into_element()
    }

    /// Follows `at` forward links from `head`.
    pub(crate) fn walk_forward(&self, at: usize) -> Link {
        let mut current = self.head;
        for _ in 0..at {
            current = self.nodes[current?].next;
        }
        current
    }

    /// Follows `at` backward links from `tail`.
    pub(crate) fn walk_backward(&self, at: usize) -> Link {
        let mut current = self.tail;
        for _ in 0..at {
            current = self.nodes[current?].prev;
        }
        current
    }

    /// Returns the node at `index`, which must lie in `-len..len`.
    fn checked_node(&self, index: isize) -> Result<NodeId> {
        let len = self.len;
        let node = match usize::try_from(index) {
            Ok(at) if at < len => self.walk_forward(at),
            Ok(_) => None,
            Err(_) if index.unsigned_abs() <= len => {
                self.walk_backward(index.unsigned_abs() - 1)
            }
            Err(_) => None,
        };
        node.ok_or_else(|| {
            debug!(index, len, "doubly linked list index out of range");
            Error::out_of_range(index, len)
        })
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Link, next: Link) {
        match prev {
            Some(prev) => assert_eq!(self.nodes[prev].next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.nodes[next].prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_lists::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `DoublyLinkedList` with room for at least `capacity`
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
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.append(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](DoublyLinkedList::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the dimensions of the list, which is always `(len,)`.
    #[inline]
    pub fn shape(&self) -> (usize,) {
        (self.len,)
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Negative indices count from the end: `-1` is the last element and
    /// `-len` the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `-len <= index < len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time for non-negative
    /// indices, and in *O*(`-index`) time for negative ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(-1), Ok(&'c'));
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let node = self.checked_node(index)?;
        Ok(&self.nodes[node].element)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](DoublyLinkedList::get).
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
        self.attach_node(None, self.head, elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        Some(self.detach_node(node))
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
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn append(&mut self, elt: T) {
        self.attach_node(self.tail, None, elt);
    }

    /// Same as [`append`](DoublyLinkedList::append).
    #[inline]
    pub fn push_back(&mut self, elt: T) {
        self.append(elt)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.tail?;
        Some(self.detach_node(node))
    }

    /// Inserts an element before the element at `index`, with the semantics
    /// of slice-style `insert` extended to negative indices:
    /// - `index` in `0..len` inserts before the element at `index`;
    /// - `index >= len` appends to the back;
    /// - `index` in `-len..0` inserts before the element at `len + index`;
    /// - `index < -len` inserts at the front.
    ///
    /// It never fails.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time for non-negative
    /// indices, and in *O*(`-index`) time for negative ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    ///
    /// list.insert(-1, 4);
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 3]);
    ///
    /// list.insert(-100, 0);
    /// list.insert(100, 5);
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: isize, elt: T) {
        let len = self.len;
        // The node that will follow the new one, `None` meaning the back.
        let next = match usize::try_from(index) {
            Ok(at) if at < len => self.walk_forward(at),
            Ok(_) => None,
            Err(_) if index.unsigned_abs() < len => {
                self.walk_backward(index.unsigned_abs() - 1)
            }
            Err(_) => self.head,
        };
        let prev = match next {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        trace!(index, len, "splice node into doubly linked list");
        self.attach_node(prev, next, elt);
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
    /// use linked_lists::{Error, DoublyLinkedList};
    ///
    /// let mut list = DoublyLinkedList::from([1]);
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.pop(), Err(Error::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.pop_back().ok_or_else(|| {
            debug!("pop from empty doubly linked list");
            Error::Empty
        })
    }

    /// Removes the element at `index` and returns it. Negative indices count
    /// from the end, as in [`get`](DoublyLinkedList::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty, and
    /// [`Error::IndexOutOfRange`] unless `-len <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([10, 20, 30]);
    /// assert_eq!(list.pop_at(-2), Ok(20));
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    /// assert!(list.pop_at(-3).is_err());
    /// ```
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        if self.is_empty() {
            debug!(index, "pop from empty doubly linked list");
            return Err(Error::Empty);
        }
        let node = self.checked_node(index)?;
        trace!(index, len = self.len, ?node, "detach node from doubly linked list");
        Ok(self.detach_node(node))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
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
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([0, 1, 2]);
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

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::convert::display_sequence(f, self.iter())
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly::DoublyLinkedList;
    use crate::{Error, ErrorKind};
    use std::cell::RefCell;

    fn assert_well_formed<T>(list: &DoublyLinkedList<T>) {
        assert_eq!(list.head.is_none(), list.len == 0);
        assert_eq!(list.tail.is_none(), list.len == 0);
        if let Some(head) = list.head {
            assert_eq!(list.nodes[head].prev, None);
        }
        if let Some(tail) = list.tail {
            assert_eq!(list.nodes[tail].next, None);
        }
        let mut prev = None;
        let mut current = list.head;
        let mut count = 0;
        while let Some(node) = current {
            assert_eq!(list.nodes[node].prev, prev);
            prev = current;
            current = list.nodes[node].next;
            count += 1;
        }
        assert_eq!(prev, list.tail);
        assert_eq!(count, list.len);
    }

    #[test]
    fn list_create() {
        let mut list = DoublyLinkedList::<i32>::new();
        assert!(list.is_empty());
        list.append(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop(), Ok(1));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = DoublyLinkedList::new();
        list.append(DropChecker::new(1, &dropped));
        list.append(DropChecker::new(2, &dropped));
        list.append(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_well_formed(&list);

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_get_negative() {
        let mut list = DoublyLinkedList::new();
        list.append(10);
        list.append(20);
        list.append(30);
        assert_eq!(list.get(-1), Ok(&30));
        assert_eq!(list.get(-2), Ok(&20));
        assert_eq!(list.get(-3), Ok(&10));
        assert_eq!(list.get(-1), list.get(list.len() as isize - 1));
        assert_eq!(list.get(-4), Err(Error::IndexOutOfRange { index: -4, len: 3 }));
        assert_eq!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert!(list.get(isize::MIN).is_err());

        *list.get_mut(-2).unwrap() = 25;
        assert_eq!(list.to_vec(), vec![10, 25, 30]);

        let empty = DoublyLinkedList::<i32>::new();
        assert_eq!(empty.get(0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(empty.get(-1).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn list_insert_matches_vec() {
        for len in 0..5 {
            for index in -8..8 {
                let mut list = DoublyLinkedList::from_iter(0..len);
                let mut vec: Vec<i32> = (0..len).collect();
                list.insert(index, -1);

                let len = len as isize;
                let at = if index < 0 {
                    (index + len).max(0)
                } else {
                    index.min(len)
                };
                vec.insert(at as usize, -1);

                assert_eq!(list.to_vec(), vec, "insert({}) into {} elements", index, len);
                assert_well_formed(&list);
            }
        }
    }

    #[test]
    fn list_insert_far_negative() {
        let mut list = DoublyLinkedList::from(['a', 'b', 'c']);
        list.insert(-100, 'x');
        assert_eq!(list.to_vec(), vec!['x', 'a', 'b', 'c']);
        assert_eq!(list.front(), Some(&'x'));
        list.insert(isize::MIN, 'y');
        list.insert(isize::MAX, 'z');
        assert_eq!(list.to_vec(), vec!['y', 'x', 'a', 'b', 'c', 'z']);
        assert_well_formed(&list);
    }

    #[test]
    fn list_pop_at() {
        let mut list = DoublyLinkedList::from([10, 20, 30]);
        assert_eq!(list.pop_at(-2), Ok(20));
        assert_eq!(list.to_vec(), vec![10, 30]);
        assert_well_formed(&list);

        assert_eq!(list.pop_at(-3), Err(Error::IndexOutOfRange { index: -3, len: 2 }));
        assert_eq!(list.pop_at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_at(-1), Ok(30));
        assert_eq!(list.back(), Some(&10));
        assert_well_formed(&list);

        assert_eq!(list.pop_at(-1), Ok(10));
        assert!(list.is_empty());
        assert_well_formed(&list);

        let mut list = DoublyLinkedList::from_iter(0..6);
        assert_eq!(list.pop_at(0), Ok(0));
        assert_eq!(list.pop_at(-5), Ok(1));
        assert_eq!(list.pop_at(3), Ok(5));
        assert_eq!(list.pop_at(1), Ok(3));
        assert_eq!(list.to_vec(), vec![2, 4]);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&4));
        assert_well_formed(&list);
    }

    #[test]
    fn list_pop_empty() {
        let mut list = DoublyLinkedList::<u8>::new();
        assert_eq!(list.pop(), Err(Error::Empty));
        assert_eq!(list.pop_at(0), Err(Error::Empty));
        assert_eq!(list.pop_at(-1), Err(Error::Empty));
        assert!(list.pop().unwrap_err().is_out_of_range());
    }

    #[test]
    fn list_slots_are_reused() {
        let mut list = DoublyLinkedList::from_iter(0..4);
        assert_eq!(list.pop_at(1), Ok(1));
        assert_eq!(list.pop_at(-2), Ok(2));
        list.insert(1, 7);
        list.insert(-1, 8);
        list.push_front(9);
        assert_eq!(list.to_vec(), vec![9, 0, 7, 8, 3]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_fmt() {
        let list = DoublyLinkedList::from(["a", "b"]);
        assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
        assert_eq!(list.to_string(), "[a, b]");
        let empty = DoublyLinkedList::<i32>::new();
        assert_eq!(format!("{:?}", empty), "[]");
        assert_eq!(empty.shape(), (0,));
    }
}
