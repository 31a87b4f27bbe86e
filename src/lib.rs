//! This crate provides two linked lists with owned nodes: a forward-only
//! [`SinglyLinkedList`] and a bidirectional [`DoublyLinkedList`].
//!
//! Both lists allow appending in constant time and inserting, removing,
//! searching or accessing elements at any position in *O*(*n*) time. The
//! doubly linked list additionally accepts negative indices, counted from the
//! end of the list.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use linked_lists::{DoublyLinkedList, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::from([1, 2, 3]);
//! list.insert(1, 5); // [1, 5, 2, 3]
//! assert_eq!(list.pop_at(2), Ok(2)); // [1, 5, 3]
//! assert_eq!(list.to_string(), "[1, 5, 3]");
//!
//! let mut list = DoublyLinkedList::from(&list);
//! assert_eq!(list.get(-1), Ok(&3));
//! list.insert(-1, 4); // [1, 5, 4, 3]
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![3, 4, 5, 1]);
//! ```
//!
//! # Memory Layout
//!
//! Each list owns an arena of node slots. Nodes refer to their neighbours by
//! slot handles rather than by pointers:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ None
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ┌─ ║  (prev)   ║ ←──────── ║  (prev)   ║ ←──────── ┄┄ ←──────── ║  (prev)   ║
//! │  ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                        ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! ↓      Node 0 ↑                Node 1                         Node n-1 ↑
//! None          │                                                        │
//!    ╔═══════════╗                                                       │
//!    ║   head    ║ ──────┘                                               │
//!    ╟───────────╢                                                       │
//!    ║   tail    ║ ──────────────────────────────────────────────────────┘
//!    ╟───────────╢
//!    ║    len    ║
//!    ╚═══════════╝
//!        List
//! ```
//! The `prev` links only exist in the [`DoublyLinkedList`].
//!
//! # Indexing
//!
//! Indices are `isize`. In a list with length *n*:
//! - [`SinglyLinkedList`] accepts `0..n`; a negative index is always out of
//!   range, and [`SinglyLinkedList::insert`] clamps it to the front.
//! - [`DoublyLinkedList`] accepts `-n..n`, where `-1` is the last element.
//!   [`DoublyLinkedList::insert`] clamps indices below `-n` to the front and
//!   indices from `n` upward to the back.
//!
//! Out-of-range accesses and searches for absent values return an [`Error`],
//! and leave the list untouched.
//!
//! ```
//! use linked_lists::{DoublyLinkedList, ErrorKind};
//!
//! let mut list = DoublyLinkedList::from([10, 20, 30]);
//! assert_eq!(list.pop_at(-4).unwrap_err().kind(), ErrorKind::OutOfRange);
//! assert_eq!(list.remove(&40).unwrap_err().kind(), ErrorKind::NotFound);
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//! ```
//!
//! # Features
//!
//! - `tracing` (default): emit [`tracing`] events when the lists are
//!   restructured, and when an operation fails.
//!
//! [`tracing`]: https://docs.rs/tracing

/// Emits a `TRACE` event when the `tracing` feature is on.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    };
}

/// Emits a `DEBUG` event when the `tracing` feature is on.
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    };
}

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use singly::SinglyLinkedList;

pub mod doubly;
pub mod singly;

mod convert;
mod error;
mod node;

#[cfg(all(not(miri), test))]
mod proptests;
