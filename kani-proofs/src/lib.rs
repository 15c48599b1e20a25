// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the arrayseq storage primitives.
//!
//! This standalone crate extracts the growth rule and the slot-shifting
//! primitives and proves them correct using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Growth never shrinks**: grown_capacity(c) >= c, and doubles when it can
//! 2. **Right shift opens exactly one hole**: prefix untouched, block moved up
//! 3. **Left shift closes exactly one hole**: prefix untouched, block moved down,
//!    vacated slot lands at len - 1
//! 4. **No panics** for any in-range index

/// Slot count of a fresh list (copied from src/array_list.rs)
pub const DEFAULT_CAPACITY: usize = 10;

// ============================================================================
// STORAGE PRIMITIVES (copied from src/array_list.rs)
// ============================================================================

/// Capacity after one growth step.
pub fn grown_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity.saturating_mul(2)
    }
}

/// Move `slots[index..len]` up one slot. Requires `index <= len < slots.len()`.
pub fn shift_right<T>(slots: &mut [Option<T>], len: usize, index: usize) {
    slots[index..=len].rotate_right(1);
}

/// Move `slots[index + 1..len]` down one slot. Requires `index < len <= slots.len()`
/// and `slots[index]` already taken.
pub fn shift_left<T>(slots: &mut [Option<T>], len: usize, index: usize) {
    slots[index..len].rotate_left(1);
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Bounded slot array size for the shift proofs.
    const SLOTS: usize = 5;

    /// Slots `[Some(0), Some(1), .., Some(len-1), None, ..]`.
    fn numbered(len: usize) -> [Option<u8>; SLOTS] {
        let mut slots = [None; SLOTS];
        for i in 0..len {
            slots[i] = Some(i as u8);
        }
        slots
    }

    /// Verify growth never shrinks and doubles whenever doubling fits.
    #[kani::proof]
    fn verify_growth_monotone() {
        let capacity: usize = kani::any();
        let grown = grown_capacity(capacity);

        kani::assert(grown >= capacity, "growth must never shrink");
        if capacity == 0 {
            kani::assert(grown == DEFAULT_CAPACITY, "zero grows to the default");
        } else if capacity <= usize::MAX / 2 {
            kani::assert(grown == capacity * 2, "non-zero capacity doubles");
        }
    }

    /// Verify the right shift keeps order and opens a hole at `index`.
    #[kani::proof]
    #[kani::unwind(6)] // SLOTS + 1
    fn verify_shift_right() {
        let len: usize = kani::any_where(|&n| n < SLOTS);
        let index: usize = kani::any_where(|&i| i <= len);
        let mut slots = numbered(len);

        shift_right(&mut slots, len, index);

        for i in 0..index {
            kani::assert(slots[i] == Some(i as u8), "prefix must not move");
        }
        kani::assert(slots[index].is_none(), "hole must open at index");
        for i in index..len {
            kani::assert(slots[i + 1] == Some(i as u8), "block must move up by one");
        }
        for i in len + 1..SLOTS {
            kani::assert(slots[i].is_none(), "tail must stay empty");
        }
    }

    /// Verify the left shift keeps order and moves the hole to `len - 1`.
    #[kani::proof]
    #[kani::unwind(6)] // SLOTS + 1
    fn verify_shift_left() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= SLOTS);
        let index: usize = kani::any_where(|&i| i < len);
        let mut slots = numbered(len);
        let taken = slots[index].take();

        shift_left(&mut slots, len, index);

        kani::assert(taken == Some(index as u8), "removed the indexed element");
        for i in 0..index {
            kani::assert(slots[i] == Some(i as u8), "prefix must not move");
        }
        for i in index..len - 1 {
            kani::assert(slots[i] == Some(i as u8 + 1), "block must move down by one");
        }
        for i in len - 1..SLOTS {
            kani::assert(slots[i].is_none(), "vacated and tail slots must be empty");
        }
    }
}
