//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::sequence::Sequence;

/// Read every live element through `get`, in order.
///
/// Goes through the public contract only, so it works for any backing
/// strategy.
pub fn snapshot<T, S>(sequence: &S) -> Vec<T>
where
    T: PartialEq + Clone,
    S: Sequence<T>,
{
    (0..sequence.size())
        .filter_map(|i| sequence.get(i).ok().cloned())
        .collect()
}

/// One step of a randomized operation script.
///
/// Indices are raw and get reduced modulo the current size by [`apply_op`],
/// so every generated script is valid regardless of the sequence state.
#[derive(Debug, Clone, PartialEq)]
pub enum Op<T> {
    InsertAt(usize, T),
    InsertFirst(T),
    InsertLast(T),
    InsertAfter(T, T),
    RemoveAt(usize),
    RemoveFirst,
    RemoveLast,
    RemoveValue(T),
    Set(usize, T),
    Clear,
}

/// Apply `op` to both a sequence and a `Vec` oracle.
///
/// Returns `false` if the two disagree on the outcome of the operation
/// (returned value, error or miss).
pub fn apply_op<T, S>(sequence: &mut S, oracle: &mut Vec<T>, op: &Op<T>) -> bool
where
    T: PartialEq + Clone,
    S: Sequence<T>,
{
    match op {
        Op::InsertAt(raw, item) => {
            let index = raw % (oracle.len() + 1);
            oracle.insert(index, item.clone());
            sequence.insert_at(index, item.clone()).is_ok()
        }
        Op::InsertFirst(item) => {
            oracle.insert(0, item.clone());
            sequence.insert_first(item.clone()).is_ok()
        }
        Op::InsertLast(item) => {
            oracle.push(item.clone());
            sequence.insert_last(item.clone()).is_ok()
        }
        Op::InsertAfter(existing, item) => {
            let expected = oracle.iter().position(|x| x == existing);
            if let Some(position) = expected {
                oracle.insert(position + 1, item.clone());
            }
            sequence.insert_after(existing, item.clone()) == Ok(expected.is_some())
        }
        Op::RemoveAt(raw) => {
            if oracle.is_empty() {
                return sequence.remove_at(*raw).is_err();
            }
            let index = raw % oracle.len();
            let expected = oracle.remove(index);
            sequence.remove_at(index).ok() == Some(expected)
        }
        Op::RemoveFirst => {
            if oracle.is_empty() {
                return sequence.remove_first().is_err();
            }
            let expected = oracle.remove(0);
            sequence.remove_first().ok() == Some(expected)
        }
        Op::RemoveLast => {
            let expected = oracle.pop();
            match expected {
                Some(expected) => sequence.remove_last().ok() == Some(expected),
                None => sequence.remove_last().is_err(),
            }
        }
        Op::RemoveValue(item) => {
            let expected = oracle.iter().position(|x| x == item);
            if let Some(position) = expected {
                oracle.remove(position);
            }
            sequence.remove_value(item) == expected.is_some()
        }
        Op::Set(raw, item) => {
            if oracle.is_empty() {
                return sequence.set(*raw, item.clone()).is_err();
            }
            let index = raw % oracle.len();
            let expected = std::mem::replace(&mut oracle[index], item.clone());
            sequence.set(index, item.clone()).ok() == Some(expected)
        }
        Op::Clear => {
            oracle.clear();
            sequence.clear();
            true
        }
    }
}
