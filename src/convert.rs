//! Conversions into, out of, and between the two list variants.
//!
//! Converting always copies element by element; the source list keeps its
//! nodes.

use crate::{DoublyLinkedList, SinglyLinkedList};
use std::fmt::{self, Display, Formatter};

/// Writes `[a, b, c]` using the elements' `Display`.
pub(crate) fn display_sequence<'a, T, I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, elt) in iter.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(elt, f)?;
    }
    f.write_str("]")
}

macro_rules! impl_conversions {
    ($List:ident, $Other:ident) => {
        impl<T, const N: usize> From<[T; N]> for $List<T> {
            fn from(arr: [T; N]) -> Self {
                let mut list = Self::with_capacity(N);
                list.extend(arr);
                list
            }
        }

        impl<T> From<Vec<T>> for $List<T> {
            fn from(vec: Vec<T>) -> Self {
                vec.into_iter().collect()
            }
        }

        impl<T: Clone> From<&$Other<T>> for $List<T> {
            fn from(other: &$Other<T>) -> Self {
                other.iter().cloned().collect()
            }
        }

        impl<T> From<$List<T>> for Vec<T> {
            fn from(list: $List<T>) -> Self {
                list.into_iter().collect()
            }
        }

        impl<T: PartialEq> PartialEq<$Other<T>> for $List<T> {
            fn eq(&self, other: &$Other<T>) -> bool {
                self.len() == other.len() && self.iter().eq(other)
            }
        }
    };
}

impl_conversions!(SinglyLinkedList, DoublyLinkedList);
impl_conversions!(DoublyLinkedList, SinglyLinkedList);
