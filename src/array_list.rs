// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable array implementation of [`Sequence`].
//!
//! Storage is a boxed slice of slots. The first `len` slots hold the live
//! elements in order; every slot after that is `None`. Capacity is the slot
//! count and only ever grows, by doubling.
//!
//! # Invariants
//!
//! - **LEN_WITHIN_CAPACITY**: `len <= storage.len()`
//! - **LIVE_PREFIX_OCCUPIED**: `storage[..len]` are all `Some`
//! - **TAIL_CLEARED**: `storage[len..]` are all `None`
//! - **CAPACITY_MONOTONE**: capacity never decreases, grows `0 -> DEFAULT_CAPACITY`
//!   or `c -> 2c`
//!
//! Each mutating operation validates its arguments before touching storage
//! and runs the debug contracts from [`crate::contracts`] on the way out.
//!
//! # Shifting
//!
//! Insertion and removal move whole blocks with `rotate_right`/`rotate_left`
//! instead of copying slot by slot:
//!
//! ```text
//! insert_at(1, X)            remove_at(1)
//! [a b c _ _]                [a b c _ _]
//!    └─┴─┘ rotate_right(1)      take b → [a _ c _ _]
//! [a _ b c _]                      └─┘ rotate_left(1)
//! [a X b c _]                [a c _ _ _]
//! ```

use std::fmt;
use std::iter;

use tracing::trace;

use crate::contracts;
use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

/// Slot count allocated by [`ArrayList::new`], and by the first growth of a
/// zero-capacity list.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity after one growth step from `capacity`.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity.saturating_mul(2)
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// A resizable, index-addressable list backed by a contiguous buffer.
///
/// ```
/// use arrayseq::{ArrayList, Sequence};
///
/// let mut list: ArrayList<&str> = ArrayList::new();
/// list.insert_last("b").unwrap();
/// list.insert_first("a").unwrap();
/// assert!(list.insert_after(&"b", "c").unwrap());
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.index_of(&"c"), Some(2));
/// assert_eq!(list.remove_first().unwrap(), "a");
/// assert_eq!(list.capacity(), 10);
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    storage: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty list with exactly `capacity` slots.
    ///
    /// A zero capacity is allowed; the first insertion then allocates
    /// [`DEFAULT_CAPACITY`] slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: empty_slots(capacity),
            len: 0,
        }
    }

    /// Number of allocated slots. Always `>= size()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn live(&self) -> &[Option<T>] {
        &self.storage[..self.len]
    }

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Make room for one more element, reallocating if every slot is taken.
    fn ensure_capacity(&mut self) {
        if self.len < self.capacity() {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity);
        contracts::check_growth_step(old_capacity, new_capacity);
        trace!(old_capacity, new_capacity, len = self.len, "growing storage");

        // Move the live prefix into a fresh buffer; the old one is dropped
        // holding only `None`s.
        let grown: Box<[Option<T>]> = self.storage[..self.len]
            .iter_mut()
            .map(Option::take)
            .chain(iter::repeat_with(|| None))
            .take(new_capacity)
            .collect();
        self.storage = grown;
    }

    /// Open a hole at `index` by moving `[index, len)` up one slot.
    ///
    /// Requires `len < capacity`, so the slot at `len` is the vacant one that
    /// rotates down into `index`.
    #[inline]
    fn shift_right(&mut self, index: usize) {
        // INVARIANT: TAIL_CLEARED - storage[len] is None, so the rotation
        // overwrites nothing.
        self.storage[index..=self.len].rotate_right(1);
    }

    /// Close the hole at `index` by moving `[index + 1, len)` down one slot.
    #[inline]
    fn shift_left(&mut self, index: usize) {
        // INVARIANT: TAIL_CLEARED - the emptied slot ends up at len - 1.
        self.storage[index..self.len].rotate_left(1);
    }

    /// Insert an element already known to be present. `index <= len`.
    fn insert_present(&mut self, index: usize, item: T) {
        let capacity_before = self.capacity();

        self.ensure_capacity();
        self.shift_right(index);
        self.storage[index] = Some(item);
        self.len += 1;

        contracts::check_capacity_monotone(capacity_before, self.capacity());
        contracts::check_well_formed(self.len, &self.storage);
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for ArrayList<T>
where
    T: PartialEq,
{
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn set<I>(&mut self, index: usize, item: I) -> Result<T>
    where
        I: Into<Option<T>>,
    {
        let item = item
            .into()
            .ok_or(SequenceError::InvalidArgument { operation: "set" })?;
        let len = self.len;

        match self.storage[..len].get_mut(index) {
            Some(Some(current)) => Ok(std::mem::replace(current, item)),
            _ => Err(SequenceError::IndexOutOfRange { index, len }),
        }
    }

    fn insert_at<I>(&mut self, index: usize, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let item = item.into().ok_or(SequenceError::InvalidArgument {
            operation: "insert_at",
        })?;
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        self.insert_present(index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = match self.storage[..len].get_mut(index).and_then(Option::take) {
            Some(removed) => removed,
            None => return Err(SequenceError::IndexOutOfRange { index, len }),
        };

        self.shift_left(index);
        self.len -= 1;

        contracts::check_well_formed(self.len, &self.storage);
        Ok(removed)
    }

    fn index_of<'a, Q>(&self, item: Q) -> Option<usize>
    where
        Q: Into<Option<&'a T>>,
        T: 'a,
    {
        let probe = item.into()?;
        self.live()
            .iter()
            .position(|slot| slot.as_ref() == Some(probe))
    }

    fn clear(&mut self) {
        let capacity = self.capacity();
        trace!(len = self.len, capacity, "clearing");

        self.storage[..self.len].fill_with(|| None);
        self.len = 0;

        contracts::check_capacity_monotone(capacity, self.capacity());
        contracts::check_well_formed(self.len, &self.storage);
    }

    /// Pops the tail slot directly; nothing else moves.
    fn remove_last(&mut self) -> Result<T> {
        let Some(last) = self.len.checked_sub(1) else {
            return Err(SequenceError::EmptyContainer {
                operation: "remove_last",
            });
        };
        // INVARIANT: LIVE_PREFIX_OCCUPIED - storage[last] is Some; the error
        // below is only reachable in release if that is broken.
        contracts::check_well_formed(self.len, &self.storage);
        let removed = self.storage[last]
            .take()
            .ok_or(SequenceError::IndexOutOfRange {
                index: last,
                len: self.len,
            })?;
        self.len = last;

        contracts::check_well_formed(self.len, &self.storage);
        Ok(removed)
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_present(self.len, item);
        }
    }
}

/// Equality over the live elements only; capacity is not compared.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live().iter().flatten()).finish()
    }
}

/// One-line summary of size and capacity.
impl<T> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArrayList[size={}, capacity={}]",
            self.len,
            self.capacity()
        )
    }
}
