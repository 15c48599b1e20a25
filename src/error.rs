// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by sequence operations.
//!
//! Only precondition violations live here. A search miss is ordinary control
//! flow and comes back as `None`/`false`, never as an error.

use std::fmt;

/// Error type for rejected sequence operations.
///
/// Every variant is raised before the container is touched, so a caller that
/// receives one can rely on the sequence being exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An absent element was offered for insertion or replacement.
    InvalidArgument { operation: &'static str },
    /// `index` falls outside the valid range for the operation.
    ///
    /// Insertion accepts `0..=len`, every other positional access `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// The operation needs at least one element.
    EmptyContainer { operation: &'static str },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidArgument { operation } => {
                write!(f, "{}: element cannot be absent", operation)
            }
            SequenceError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            SequenceError::EmptyContainer { operation } => {
                write!(f, "{}: sequence is empty", operation)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Result alias used throughout the crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
