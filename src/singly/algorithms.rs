use crate::singly::SinglyLinkedList;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SinglyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for SinglyLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> SinglyLinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([0, 1, 2]);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
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
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from(["a", "b", "a"]);
    /// assert_eq!(list.index_of(&"a"), Ok(0));
    /// assert_eq!(list.index_of(&"b"), Ok(1));
    /// assert_eq!(
    ///     list.index_of(&"c").unwrap_err().to_string(),
    ///     r#""c" is not in the linked list"#
    /// );
    /// ```
    pub fn index_of(&self, x: &T) -> Result<usize>
    where
        T: PartialEq + Debug,
    {
        self.iter().position(|e| e == x).ok_or_else(|| {
            debug!(value = ?x, "value not found in singly linked list");
            Error::not_found(x)
        })
    }

    /// Removes the first element equal to `x` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `x`; the list is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 1]);
    /// assert_eq!(list.remove(&1), Ok(1));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// assert!(list.remove(&3).is_err());
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// ```
    pub fn remove(&mut self, x: &T) -> Result<T>
    where
        T: PartialEq + Debug,
    {
        let at = self.index_of(x)?;
        self.remove_at(at).ok_or_else(|| Error::not_found(x))
    }

    /// Reverses the order of the elements, in place.
    ///
    /// Every forward link is turned around and `head`/`tail` are swapped; no
    /// node is moved or reallocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        trace!(len = self.len, "reverse singly linked list");
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            current = std::mem::replace(&mut self.nodes[node].next, prev);
            prev = Some(node);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, SinglyLinkedList};
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
            let mut list = SinglyLinkedList::from(input.clone());
            list.reverse();
            let mut reversed = input.clone();
            reversed.reverse();
            assert_eq!(list.to_vec(), reversed);
            assert_eq!(list.len(), input.len());
            assert_eq!(list.front(), reversed.first());
            assert_eq!(list.back(), reversed.last());

            // The reversed list is still appendable from its new tail.
            list.append(100);
            assert_eq!(list.back(), Some(&100));
            list.pop().unwrap();

            list.reverse();
            assert_eq!(list.to_vec(), input);
        }
        test_case(vec![]);
        test_case(vec![1]);
        test_case(vec![1, 2]);
        test_case((0..10).collect());
    }

    #[test]
    fn list_index_of() {
        let list = SinglyLinkedList::from([3, 1, 4, 1, 5]);
        assert_eq!(list.index_of(&1), Ok(1));
        assert_eq!(list.index_of(&5), Ok(4));
        assert_eq!(
            list.index_of(&9),
            Err(Error::NotFound {
                value: "9".to_owned()
            })
        );
        assert!(SinglyLinkedList::<i32>::new()
            .index_of(&0)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn list_remove() {
        let mut list = SinglyLinkedList::from(['a', 'b', 'c', 'b']);
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
        let list = SinglyLinkedList::from([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_eq!(hash_of(&list), hash_of(&cloned));
        assert!(list < SinglyLinkedList::from([1, 3]));
        assert!(list > SinglyLinkedList::from([1, 2]));
        assert_ne!(list, SinglyLinkedList::from([1, 2]));
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }

    #[test]
    fn list_clone_is_independent() {
        let list = SinglyLinkedList::from([1, 2, 3]);
        let mut cloned = list.clone();
        cloned.append(4);
        *cloned.get_mut(0).unwrap() = 0;
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(cloned.to_vec(), vec![0, 2, 3, 4]);
    }
}
