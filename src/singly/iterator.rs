use crate::node::{self, Arena, Link, SinglyNode, Slot};
use crate::singly::SinglyLinkedList;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `SinglyLinkedList`.
///
/// It follows the forward links from `next` and counts down the elements left
/// in `len`.
pub struct Iter<'a, T: 'a> {
    nodes: &'a Arena<SinglyNode<T>>,
    next: Link,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a SinglyLinkedList<T>) -> Self {
        Self {
            nodes: &list.nodes,
            next: list.head,
            len: list.len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.clone() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let current = &nodes[self.next?];
        self.next = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `SinglyLinkedList`.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut SinglyLinkedList<T>` is added to protect the list
/// from being read.
///
/// # Examples
///
/// `SinglyLinkedList` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use linked_lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    slots: NonNull<Slot<SinglyNode<T>>>,
    next: Link,
    len: usize,
    _marker: PhantomData<&'a mut SinglyLinkedList<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> Self {
        Self {
            slots: list.nodes.slots_ptr(),
            next: list.head,
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the list is mutably borrowed for `'a` so the arena is
        // neither dropped nor reallocated, `next` is a live link of that list,
        // and every node is visited at most once, so the returned references
        // never alias.
        let current = unsafe { node::node_mut(self.slots, self.next?) };
        self.next = current.next;
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `SinglyLinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`SinglyLinkedList`] (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: SinglyLinkedList::into_iter
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = SinglyLinkedList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

/// Appends every element of the source, in iteration order.
///
/// # Examples
///
/// ```
/// use linked_lists::{DoublyLinkedList, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::from([1, 2]);
/// list.extend(vec![3, 4]);
///
/// let other = DoublyLinkedList::from([5, 6]);
/// list.extend(other.iter());
/// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
/// ```
impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.append(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
