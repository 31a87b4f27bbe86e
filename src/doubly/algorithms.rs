use crate::doubly::DoublyLinkedList;
use crate::node::NodeId;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublyLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut iter_other = other.iter();
        // Reuse the nodes (and the elements' buffers) already in place.
        for elem in self.iter_mut() {
            match iter_other.next() {
                Some(elem_other) => elem.clone_from(elem_other),
                None => break,
            }
        }
        while self.len() > other.len() {
            self.pop_back();
        }
        self.extend(iter_other.cloned());
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

// private methods
impl<T> DoublyLinkedList<T> {
    /// Returns the position and the handle of the first node holding an
    /// element equal to `x`.
    fn find(&self, x: &T) -> Option<(usize, NodeId)>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        let mut at = 0;
        while let Some(node) = current {
            if self.nodes[node].element == *x {
                return Some((at, node));
            }
            current = self.nodes[node].next;
            at += 1;
        }
        None
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([0, 1, 2]);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.find(x).is_some()
    }

    /// Returns the position of the first element equal to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([5, 6, 5]);
    /// assert_eq!(list.index_of(&6), Ok(1));
    /// assert!(list.index_of(&7).unwrap_err().is_not_found());
    /// ```
    pub fn index_of(&self, x: &T) -> Result<usize>
    where
        T: PartialEq + Debug,
    {
        match self.find(x) {
            Some((at, _)) => Ok(at),
            None => {
                debug!(value = ?x, "value not found in doubly linked list");
                Err(Error::not_found(x))
            }
        }
    }

    /// Removes the first element equal to `x` and returns it.
    ///
    /// The matching node is unlinked where the search stops, without a
    /// second walk from either end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `x`; the list is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from(["x", "y", "x"]);
    /// assert_eq!(list.remove(&"x"), Ok("x"));
    /// assert_eq!(list.to_vec(), vec!["y", "x"]);
    /// assert!(list.remove(&"z").is_err());
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove(&mut self, x: &T) -> Result<T>
    where
        T: PartialEq + Debug,
    {
        match self.find(x) {
            Some((_, node)) => {
                trace!(len = self.len, ?node, "detach node from doubly linked list");
                Ok(self.detach_node(node))
            }
            None => {
                debug!(value = ?x, "value not found in doubly linked list");
                Err(Error::not_found(x))
            }
        }
    }

    /// Reverses the order of the elements, in place.
    ///
    /// The `prev` and `next` links of every node are swapped, and so are
    /// `head` and `tail`; no node is moved or reallocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// assert_eq!(list.get(-1), Ok(&1));
    /// ```
    pub fn reverse(&mut self) {
        trace!(len = self.len, "reverse doubly linked list");
        let mut current = self.head;
        while let Some(node) = current {
            let node = &mut self.nodes[node];
            std::mem::swap(&mut node.prev, &mut node.next);
            // The old `next` is now `prev`.
            current = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Copies the elements into a `Vec`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([1, 2]);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DoublyLinkedList, Error};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_reverse() {
        fn test_case(input: Vec<i32>) {
            let mut list = DoublyLinkedList::from(input.clone());
            list.reverse();
            let mut reversed = input.clone();
            reversed.reverse();
            assert_eq!(list.to_vec(), reversed);
            assert_eq!(list.iter().rev().cloned().collect::<Vec<_>>(), input);
            assert_eq!(list.len(), input.len());
            assert_eq!(list.front(), reversed.first());
            assert_eq!(list.back(), reversed.last());

            // Both ends still work after the links are swapped.
            list.push_front(-1);
            list.append(100);
            assert_eq!(list.pop_front(), Some(-1));
            assert_eq!(list.pop(), Ok(100));

            list.reverse();
            assert_eq!(list.to_vec(), input);
        }
        test_case(vec![]);
        test_case(vec![1]);
        test_case(vec![1, 2]);
        test_case((0..10).collect());
    }

    #[test]
    fn list_reverse_then_index() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        list.reverse();
        assert_eq!(list.get(0), Ok(&4));
        assert_eq!(list.get(-1), Ok(&0));
        assert_eq!(list.pop_at(-2), Ok(1));
        list.insert(-1, 9);
        assert_eq!(list.to_vec(), vec![4, 3, 2, 9, 0]);
    }

    #[test]
    fn list_index_of() {
        let list = DoublyLinkedList::from([3, 1, 4, 1, 5]);
        assert_eq!(list.index_of(&1), Ok(1));
        assert_eq!(list.index_of(&5), Ok(4));
        assert_eq!(
            list.index_of(&9),
            Err(Error::NotFound {
                value: "9".to_owned()
            })
        );
        assert!(DoublyLinkedList::<i32>::new()
            .index_of(&0)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn list_remove() {
        let mut list = DoublyLinkedList::from(['a', 'b', 'c', 'b']);
        assert_eq!(list.remove(&'b'), Ok('b'));
        assert_eq!(list.to_vec(), vec!['a', 'c', 'b']);
        assert_eq!(list.remove(&'b'), Ok('b'));
        assert_eq!(list.back(), Some(&'c'));
        assert_eq!(list.remove(&'a'), Ok('a'));
        assert_eq!(list.front(), Some(&'c'));

        let err = list.remove(&'z').unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "'z' is not in the linked list");
        assert_eq!(list.to_vec(), vec!['c']);

        assert_eq!(list.remove(&'c'), Ok('c'));
        assert!(list.is_empty());
    }

    #[test]
    fn list_compare_and_hash() {
        let list = DoublyLinkedList::from([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_eq!(hash_of(&list), hash_of(&cloned));
        assert!(list < DoublyLinkedList::from([1, 3]));
        assert!(list > DoublyLinkedList::from([1, 2]));
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }

    #[test]
    fn list_clone_from() {
        fn test_case(from: Vec<String>, to: Vec<String>) {
            let source = DoublyLinkedList::from(from.clone());
            let mut target = DoublyLinkedList::from(to);
            target.clone_from(&source);
            assert_eq!(target.to_vec(), from);
            assert_eq!(target.len(), source.len());
            assert_eq!(target.back(), source.back());
        }
        let strings = |n: usize| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
        test_case(strings(3), strings(5));
        test_case(strings(5), strings(3));
        test_case(strings(0), strings(2));
        test_case(strings(2), strings(0));
    }
}
