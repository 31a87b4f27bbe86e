//! Model-based tests: every list operation is replayed on a `Vec` and the
//! results must agree.

use crate::{DoublyLinkedList, ErrorKind, SinglyLinkedList};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append(u8),
    PushFront(u8),
    Insert(isize, u8),
    Pop,
    PopAt(isize),
    PopFront,
    Remove(u8),
    Reverse,
}

fn op() -> impl Strategy<Value = Op> {
    // Small values and indices so that searches hit and indices straddle
    // both ends of the list.
    prop_oneof![
        3 => (0..8u8).prop_map(Op::Append),
        1 => (0..8u8).prop_map(Op::PushFront),
        3 => (-12..12isize, 0..8u8).prop_map(|(index, x)| Op::Insert(index, x)),
        1 => Just(Op::Pop),
        2 => (-12..12isize).prop_map(Op::PopAt),
        1 => Just(Op::PopFront),
        2 => (0..8u8).prop_map(Op::Remove),
        1 => Just(Op::Reverse),
    ]
}

/// Resolves an index the way the singly linked list does: no negative
/// indexing, `None` if out of range.
fn singly_position(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&at| at < len)
}

/// Resolves an index the way the doubly linked list does: negative indices
/// count from the end, `None` if out of range.
fn doubly_position(index: isize, len: usize) -> Option<usize> {
    let len = len as isize;
    let at = if index < 0 { index + len } else { index };
    (0..len).contains(&at).then(|| at as usize)
}

fn doubly_insert_position(index: isize, len: usize) -> usize {
    let len = len as isize;
    let at = if index < 0 { (index + len).max(0) } else { index.min(len) };
    at as usize
}

fn singly_insert_position(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize) as usize
}

proptest! {
    #[test]
    fn singly_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<u8> = Vec::new();
        for op in ops {
            match op {
                Op::Append(x) => {
                    list.append(x);
                    model.push(x);
                }
                Op::PushFront(x) => {
                    list.push_front(x);
                    model.insert(0, x);
                }
                Op::Insert(index, x) => {
                    list.insert(index, x);
                    model.insert(singly_insert_position(index, model.len()), x);
                }
                Op::Pop => match model.pop() {
                    Some(x) => prop_assert_eq!(list.pop(), Ok(x)),
                    None => prop_assert_eq!(list.pop().unwrap_err().kind(), ErrorKind::OutOfRange),
                },
                Op::PopAt(index) => match singly_position(index, model.len()) {
                    Some(at) => prop_assert_eq!(list.pop_at(index), Ok(model.remove(at))),
                    None => {
                        prop_assert_eq!(list.pop_at(index).unwrap_err().kind(), ErrorKind::OutOfRange);
                    }
                },
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
                Op::Remove(x) => match model.iter().position(|&e| e == x) {
                    Some(at) => {
                        prop_assert_eq!(list.index_of(&x), Ok(at));
                        prop_assert_eq!(list.remove(&x), Ok(model.remove(at)));
                    }
                    None => {
                        prop_assert_eq!(list.remove(&x).unwrap_err().kind(), ErrorKind::NotFound);
                    }
                },
                Op::Reverse => {
                    list.reverse();
                    model.reverse();
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.first());
            prop_assert_eq!(list.back(), model.last());
        }
        prop_assert_eq!(list.to_vec(), model);
    }

    #[test]
    fn doubly_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = DoublyLinkedList::new();
        let mut model: Vec<u8> = Vec::new();
        for op in ops {
            match op {
                Op::Append(x) => {
                    list.append(x);
                    model.push(x);
                }
                Op::PushFront(x) => {
                    list.push_front(x);
                    model.insert(0, x);
                }
                Op::Insert(index, x) => {
                    list.insert(index, x);
                    model.insert(doubly_insert_position(index, model.len()), x);
                }
                Op::Pop => match model.pop() {
                    Some(x) => prop_assert_eq!(list.pop(), Ok(x)),
                    None => prop_assert_eq!(list.pop().unwrap_err().kind(), ErrorKind::OutOfRange),
                },
                Op::PopAt(index) => match doubly_position(index, model.len()) {
                    Some(at) => prop_assert_eq!(list.pop_at(index), Ok(model.remove(at))),
                    None => {
                        prop_assert_eq!(list.pop_at(index).unwrap_err().kind(), ErrorKind::OutOfRange);
                    }
                },
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
                Op::Remove(x) => match model.iter().position(|&e| e == x) {
                    Some(at) => {
                        prop_assert_eq!(list.index_of(&x), Ok(at));
                        prop_assert_eq!(list.remove(&x), Ok(model.remove(at)));
                    }
                    None => {
                        prop_assert_eq!(list.remove(&x).unwrap_err().kind(), ErrorKind::NotFound);
                    }
                },
                Op::Reverse => {
                    list.reverse();
                    model.reverse();
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.first());
            prop_assert_eq!(list.back(), model.last());
        }
        prop_assert_eq!(list.iter().rev().collect::<Vec<_>>(), model.iter().rev().collect::<Vec<_>>());
        prop_assert_eq!(list.to_vec(), model);
    }

    #[test]
    fn get_matches_vec(values in prop::collection::vec(any::<i32>(), 0..16), index in -20..20isize) {
        let singly = SinglyLinkedList::from(values.clone());
        match singly_position(index, values.len()) {
            Some(at) => prop_assert_eq!(singly.get(index), Ok(&values[at])),
            None => prop_assert!(singly.get(index).unwrap_err().is_out_of_range()),
        }

        let doubly = DoublyLinkedList::from(values.clone());
        match doubly_position(index, values.len()) {
            Some(at) => prop_assert_eq!(doubly.get(index), Ok(&values[at])),
            None => prop_assert!(doubly.get(index).unwrap_err().is_out_of_range()),
        }
        if !values.is_empty() {
            prop_assert_eq!(doubly.get(-1), doubly.get(values.len() as isize - 1));
            prop_assert_eq!(singly.get(0), doubly.get(0));
        }
    }

    #[test]
    fn reverse_is_an_involution(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut singly = SinglyLinkedList::from(values.clone());
        singly.reverse();
        singly.reverse();
        prop_assert_eq!(singly.to_vec(), values.clone());

        let mut doubly = DoublyLinkedList::from(values.clone());
        doubly.reverse();
        doubly.reverse();
        prop_assert_eq!(doubly.to_vec(), values);
    }

    #[test]
    fn copies_are_independent(values in prop::collection::vec(any::<i32>(), 0..32), x in any::<i32>()) {
        let singly = SinglyLinkedList::from(values.clone());
        let mut doubly = DoublyLinkedList::from(&singly);
        let mut copy = SinglyLinkedList::from(&doubly);
        prop_assert_eq!(doubly.to_vec(), values.clone());
        prop_assert_eq!(copy.to_vec(), values.clone());

        doubly.append(x);
        copy.push_front(x);
        if let Ok(first) = doubly.get_mut(0) {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(singly.to_vec(), values);
    }

    #[test]
    fn pop_at_index_of_removes_one(values in prop::collection::vec(0..4u8, 1..32), x in 0..4u8) {
        let mut singly = SinglyLinkedList::from(values.clone());
        let mut doubly = DoublyLinkedList::from(values.clone());
        let mut model = values;
        if let Some(at) = model.iter().position(|&e| e == x) {
            model.remove(at);
            let index = singly.index_of(&x).unwrap() as isize;
            prop_assert_eq!(singly.pop_at(index), Ok(x));
            let index = doubly.index_of(&x).unwrap() as isize;
            prop_assert_eq!(doubly.pop_at(index), Ok(x));
        } else {
            prop_assert!(singly.index_of(&x).is_err());
            prop_assert!(doubly.index_of(&x).is_err());
        }
        prop_assert_eq!(singly.to_vec(), model.clone());
        prop_assert_eq!(doubly.to_vec(), model);
    }
}
