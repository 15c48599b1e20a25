//! Runtime contracts for the list storage invariants.
//!
//! Debug-mode assertions that verify the storage invariants after every
//! mutation. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Name the invariant they check in the panic message
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Invariant                                   |
//! |-----------------------------|---------------------------------------------|
//! | `check_well_formed`         | LEN_WITHIN_CAPACITY, LIVE_PREFIX_OCCUPIED, TAIL_CLEARED |
//! | `check_capacity_monotone`   | CAPACITY_MONOTONE                           |
//! | `check_growth_step`         | CAPACITY_MONOTONE (doubling / default)      |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if an invariant is violated
//! check_well_formed(list.len, &list.storage);
//!
//! // In release builds, this is a no-op
//! ```

use crate::array_list::DEFAULT_CAPACITY;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// INVARIANT: DEFAULT_CAPACITY_POSITIVE
// Growth from zero must produce at least one slot.
const _: () = assert!(DEFAULT_CAPACITY > 0);

// ============================================================================
// STORAGE CONTRACTS
// ============================================================================

/// Check the slot layout: `len` fits in storage, the live prefix is occupied
/// and the tail is empty.
///
/// # Panics (debug builds only)
/// Panics if `len > slots.len()`, any slot in `[0, len)` is `None`, or any
/// slot in `[len, capacity)` is `Some`.
#[inline]
pub fn check_well_formed<T>(len: usize, slots: &[Option<T>]) {
    // The scans below are O(capacity); skip them entirely in release.
    if !cfg!(debug_assertions) {
        return;
    }

    // INVARIANT: LEN_WITHIN_CAPACITY
    debug_assert!(
        len <= slots.len(),
        "Contract violation: LEN_WITHIN_CAPACITY - len {} > capacity {}",
        len,
        slots.len()
    );

    let (live, tail) = slots.split_at(len.min(slots.len()));

    // INVARIANT: LIVE_PREFIX_OCCUPIED
    let hole = live.iter().position(Option::is_none);
    debug_assert!(
        hole.is_none(),
        "Contract violation: LIVE_PREFIX_OCCUPIED - slot {} is empty (len {})",
        hole.unwrap_or_default(),
        len
    );

    // INVARIANT: TAIL_CLEARED
    let stale = tail.iter().position(Option::is_some);
    debug_assert!(
        stale.is_none(),
        "Contract violation: TAIL_CLEARED - slot {} still holds a value (len {})",
        len + stale.unwrap_or_default(),
        len
    );
}

// ============================================================================
// CAPACITY CONTRACTS
// ============================================================================

/// Check that an operation did not shrink storage.
///
/// # Panics (debug builds only)
/// Panics if `after < before`.
#[inline]
pub fn check_capacity_monotone(before: usize, after: usize) {
    // INVARIANT: CAPACITY_MONOTONE
    debug_assert!(
        after >= before,
        "Contract violation: CAPACITY_MONOTONE - capacity shrank from {} to {}",
        before,
        after
    );
}

/// Check a single growth step: zero grows to the default, anything else doubles.
///
/// # Panics (debug builds only)
/// Panics if `new` is not the expected successor of `old`.
#[inline]
pub fn check_growth_step(old: usize, new: usize) {
    let expected = if old == 0 {
        DEFAULT_CAPACITY
    } else {
        old.saturating_mul(2)
    };

    // INVARIANT: CAPACITY_MONOTONE
    debug_assert!(
        new == expected && new > old,
        "Contract violation: CAPACITY_MONOTONE - growth {} -> {} (expected {})",
        old,
        new,
        expected
    );
}
