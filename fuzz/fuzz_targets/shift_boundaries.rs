// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for insert/remove at the edges of the valid index range.
//!
//! Indices are used raw, so most of them are out of range. Out-of-range
//! calls must return `IndexOutOfRange` without touching the list; in-range
//! calls must move exactly the elements after the index.

#![no_main]

use arrayseq::{ArrayList, Sequence, SequenceError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u16>, Vec<(bool, usize)>)| {
    let (initial, probes) = data;
    let mut list: ArrayList<u16> = initial.iter().copied().collect();
    let mut oracle = initial;

    for (insert, index) in probes {
        let len = oracle.len();
        let before = list.clone();

        if insert {
            let result = list.insert_at(index, u16::MAX);
            if index <= len {
                assert_eq!(result, Ok(()));
                oracle.insert(index, u16::MAX);
            } else {
                assert_eq!(result, Err(SequenceError::IndexOutOfRange { index, len }));
                assert_eq!(list, before, "rejected insert modified the list");
            }
        } else {
            let result = list.remove_at(index);
            if index < len {
                assert_eq!(result, Ok(oracle.remove(index)));
            } else {
                assert_eq!(result, Err(SequenceError::IndexOutOfRange { index, len }));
                assert_eq!(list, before, "rejected remove modified the list");
            }
        }

        assert_eq!(list.size(), oracle.len());
        for (i, expected) in oracle.iter().enumerate() {
            assert_eq!(list.get(i), Ok(expected));
        }
    }
});
