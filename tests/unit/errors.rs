//! Precondition violations: each is reported and leaves the list unchanged.

use super::common::{counting, list_of, snapshot};
use arrayseq::{ArrayList, Sequence, SequenceError};

fn out_of_range(index: usize, len: usize) -> SequenceError {
    SequenceError::IndexOutOfRange { index, len }
}

// ============================================================================
// INDEX OUT OF RANGE
// ============================================================================

#[test]
fn get_at_size_is_out_of_range() {
    let list = counting(3);
    assert_eq!(list.get(3), Err(out_of_range(3, 3)));
    assert_eq!(list.get(usize::MAX), Err(out_of_range(usize::MAX, 3)));
}

#[test]
fn remove_at_size_is_out_of_range() {
    let mut list = counting(3);
    assert_eq!(list.remove_at(3), Err(out_of_range(3, 3)));
    assert_eq!(snapshot(&list), vec![0, 1, 2]);
}

#[test]
fn set_at_size_is_out_of_range() {
    let mut list = counting(3);
    assert_eq!(list.set(3, 9), Err(out_of_range(3, 3)));
    assert_eq!(snapshot(&list), vec![0, 1, 2]);
}

#[test]
fn insert_at_one_past_size_is_out_of_range() {
    let mut list = counting(3);
    assert_eq!(list.insert_at(4, 9), Err(out_of_range(4, 3)));
    assert_eq!(snapshot(&list), vec![0, 1, 2]);

    // The size itself is a valid insertion point
    assert_eq!(list.insert_at(3, 9), Ok(()));
}

#[test]
fn largest_index_is_out_of_range_everywhere() {
    let mut list = counting(3);

    assert_eq!(list.remove_at(usize::MAX), Err(out_of_range(usize::MAX, 3)));
    assert_eq!(list.insert_at(usize::MAX, 9), Err(out_of_range(usize::MAX, 3)));
    assert_eq!(list.set(usize::MAX, 9), Err(out_of_range(usize::MAX, 3)));
    assert_eq!(snapshot(&list), vec![0, 1, 2]);
    assert_eq!(list.capacity(), 10);
}

#[test]
fn positional_access_on_empty_list_is_out_of_range() {
    let mut list: ArrayList<i32> = ArrayList::new();
    assert_eq!(list.get(0), Err(out_of_range(0, 0)));
    assert_eq!(list.remove_at(0), Err(out_of_range(0, 0)));
    assert_eq!(list.insert_at(1, 5), Err(out_of_range(1, 0)));
}

// ============================================================================
// EMPTY CONTAINER
// ============================================================================

#[test]
fn empty_list_queries_report_empty_container() {
    let mut list: ArrayList<i32> = ArrayList::new();

    assert_eq!(
        list.first(),
        Err(SequenceError::EmptyContainer { operation: "first" })
    );
    assert_eq!(
        list.last(),
        Err(SequenceError::EmptyContainer { operation: "last" })
    );
    assert_eq!(
        list.remove_first(),
        Err(SequenceError::EmptyContainer {
            operation: "remove_first"
        })
    );
    assert_eq!(
        list.remove_last(),
        Err(SequenceError::EmptyContainer {
            operation: "remove_last"
        })
    );
}

#[test]
fn list_emptied_by_removal_reports_empty_container() {
    let mut list = list_of(&[1]);
    list.remove_last().unwrap();
    assert!(matches!(
        list.remove_last(),
        Err(SequenceError::EmptyContainer { .. })
    ));
}

// ============================================================================
// INVALID ARGUMENT
// ============================================================================

#[test]
fn absent_items_are_rejected_everywhere() {
    let mut list = list_of(&[1, 2]);
    let absent: Option<i32> = None;

    assert!(matches!(
        list.insert_at(0, absent),
        Err(SequenceError::InvalidArgument { .. })
    ));
    assert!(matches!(
        list.insert_first(absent),
        Err(SequenceError::InvalidArgument { .. })
    ));
    assert!(matches!(
        list.insert_last(absent),
        Err(SequenceError::InvalidArgument { .. })
    ));
    assert_eq!(
        list.set(0, absent),
        Err(SequenceError::InvalidArgument { operation: "set" })
    );
    assert_eq!(snapshot(&list), vec![1, 2]);
}

#[test]
fn insert_after_requires_both_arguments() {
    let mut list = list_of(&[1, 2]);
    let invalid = Err(SequenceError::InvalidArgument {
        operation: "insert_after",
    });

    assert_eq!(list.insert_after(&1, None), invalid);
    assert_eq!(list.insert_after(None, 5), invalid);
    assert_eq!(snapshot(&list), vec![1, 2]);
}

#[test]
fn invalid_argument_wins_over_bad_index() {
    let mut list = list_of(&[1]);
    assert_eq!(
        list.set(10, None),
        Err(SequenceError::InvalidArgument { operation: "set" })
    );
}

#[test]
fn errors_render_for_humans() {
    let err = counting(2).get(5).unwrap_err();
    assert_eq!(err.to_string(), "index 5 out of range for length 2");
}
