use std::fmt::Debug;

/// A specialized [`Result`](std::result::Result) for list operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the fallible operations of
/// [`SinglyLinkedList`](crate::SinglyLinkedList) and
/// [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// A failing operation never mutates the list.
///
/// Match on [`Error::kind`] rather than on the message, the message is for
/// humans only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `pop` or `pop_at` was called on an empty list.
    #[error("pop from empty linked list")]
    Empty,
    /// The index is outside the valid bounds for a list of length `len`.
    #[error("linked list index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// No element compares equal to the searched value.
    ///
    /// `value` is the `Debug` rendering of that value.
    #[error("{value} is not in the linked list")]
    NotFound { value: String },
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index was out of bounds, including any pop from an empty list.
    OutOfRange,
    /// A searched value was absent.
    NotFound,
}

impl Error {
    pub(crate) fn out_of_range(index: isize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    pub(crate) fn not_found<T: Debug + ?Sized>(value: &T) -> Self {
        Error::NotFound {
            value: format!("{:?}", value),
        }
    }

    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::{ErrorKind, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::<i32>::new();
    /// assert_eq!(list.pop().unwrap_err().kind(), ErrorKind::OutOfRange);
    /// assert_eq!(list.get(0).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// assert_eq!(list.index_of(&1).unwrap_err().kind(), ErrorKind::NotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Empty | Error::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            Error::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
