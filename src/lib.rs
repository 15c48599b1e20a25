//! Resizable, index-addressable sequence with checked storage invariants.
//!
//! This crate provides [`ArrayList`], a growable array supporting positional
//! insertion and removal, linear equality search, and amortized O(1) appends.
//! The operations are defined by the [`Sequence`] trait so other backing
//! strategies can satisfy the same contract.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//! │  sequence.rs │◀────│ array_list.rs  │────▶│   error.rs   │
//! │  (Sequence   │     │ (ArrayList,    │     │ (Sequence-   │
//! │   contract)  │     │  grow, shift)  │     │   Error)     │
//! └──────────────┘     └────────────────┘     └──────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (len ≤ capacity, occupied prefix, cleared tail,    │
//! │   capacity only grows - debug assertions)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Errors
//!
//! | Error                              | Raised by                                |
//! |------------------------------------|------------------------------------------|
//! | `SequenceError::InvalidArgument`   | inserting or setting an absent element   |
//! | `SequenceError::IndexOutOfRange`   | positional ops outside the valid range   |
//! | `SequenceError::EmptyContainer`    | `first`/`last`/`remove_first`/`remove_last` on empty |
//!
//! A search miss is not an error: `index_of` returns `None`, `remove_value`
//! returns `false`, `insert_after` returns `Ok(false)`.
//!
//! # Usage
//!
//! ```
//! use arrayseq::{ArrayList, Sequence, SequenceError};
//!
//! let mut list: ArrayList<u32> = ArrayList::new();
//! list.insert_last(2).unwrap();
//! list.insert_first(1).unwrap();
//! list.insert_at(2, 3).unwrap();
//!
//! assert_eq!(list.get(1), Ok(&2));
//! assert_eq!(list.index_of(&3), Some(2));
//! assert_eq!(list.insert_at(9, 4), Err(SequenceError::IndexOutOfRange { index: 9, len: 3 }));
//! assert_eq!(list.insert_last(None), Err(SequenceError::InvalidArgument { operation: "insert_at" }));
//! ```

// Module declarations
mod array_list;
pub mod contracts;
mod error;
mod sequence;
pub mod testing;

// Re-exports for public API
pub use array_list::{ArrayList, DEFAULT_CAPACITY};
pub use error::{Result, SequenceError};
pub use sequence::Sequence;
