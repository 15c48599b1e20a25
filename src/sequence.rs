// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence contract: values `x(0) .. x(n-1)` and the operations on them.
//!
//! A backing strategy only has to provide the positional primitives
//! (`size`, `get`, `set`, `insert_at`, `remove_at`, `index_of`, `clear`).
//! Everything else is derived here, so an array, a linked structure or a
//! gap buffer all answer the same way at the edges.
//!
//! # Absent elements
//!
//! Insertion and replacement take `impl Into<Option<T>>`. Passing a plain `T`
//! is the normal case; passing `None` is rejected with
//! [`SequenceError::InvalidArgument`] and never reaches storage. Search
//! probes take `impl Into<Option<&T>>`, where an absent probe is just a miss.

use crate::error::{Result, SequenceError};

/// Index-addressable sequence with positional insertion and removal.
pub trait Sequence<T>
where
    T: PartialEq,
{
    /// Number of live elements.
    fn size(&self) -> usize;

    /// Borrow `x(index)`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replace `x(index)` with `item`, returning the previous value.
    fn set<I>(&mut self, index: usize, item: I) -> Result<T>
    where
        I: Into<Option<T>>;

    /// Insert `item` as `x(index)`, moving `x(index) .. x(n-1)` back by one.
    ///
    /// `index == size()` appends.
    fn insert_at<I>(&mut self, index: usize, item: I) -> Result<()>
    where
        I: Into<Option<T>>;

    /// Remove `x(index)`, moving `x(index+1) .. x(n-1)` forward by one.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Position of the first element equal to `item`.
    fn index_of<'a, Q>(&self, item: Q) -> Option<usize>
    where
        Q: Into<Option<&'a T>>,
        T: 'a;

    /// Drop every element. Storage already allocated is kept.
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains<'a, Q>(&self, item: Q) -> bool
    where
        Q: Into<Option<&'a T>>,
        T: 'a,
    {
        self.index_of(item).is_some()
    }

    fn insert_first<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        self.insert_at(0, item)
    }

    fn insert_last<I>(&mut self, item: I) -> Result<()>
    where
        I: Into<Option<T>>,
    {
        let end = self.size();
        self.insert_at(end, item)
    }

    /// Insert `item` directly after the first element equal to `existing`.
    ///
    /// Returns `Ok(false)` and leaves the sequence untouched when `existing`
    /// is not present. Both arguments must be present.
    fn insert_after<'a, Q, I>(&mut self, existing: Q, item: I) -> Result<bool>
    where
        Q: Into<Option<&'a T>>,
        I: Into<Option<T>>,
        T: 'a,
    {
        let invalid = SequenceError::InvalidArgument {
            operation: "insert_after",
        };
        let existing = existing.into().ok_or_else(|| invalid.clone())?;
        let item = item.into().ok_or(invalid)?;

        match self.index_of(existing) {
            Some(position) => {
                self.insert_at(position + 1, item)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(SequenceError::EmptyContainer {
                operation: "remove_first",
            });
        }
        self.remove_at(0)
    }

    fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(SequenceError::EmptyContainer {
                operation: "remove_last",
            });
        }
        let last = self.size() - 1;
        self.remove_at(last)
    }

    /// Remove the first element equal to `item`. Returns whether one was removed.
    fn remove_value<'a, Q>(&mut self, item: Q) -> bool
    where
        Q: Into<Option<&'a T>>,
        T: 'a,
    {
        match self.index_of(item) {
            Some(position) => self.remove_at(position).is_ok(),
            None => false,
        }
    }

    fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(SequenceError::EmptyContainer { operation: "first" });
        }
        self.get(0)
    }

    fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(SequenceError::EmptyContainer { operation: "last" });
        }
        self.get(self.size() - 1)
    }
}
