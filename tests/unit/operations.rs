//! Insertion, removal, access and search on `ArrayList`.

use super::common::{assert_list_well_formed, counting, list_of, snapshot};
use arrayseq::{ArrayList, Sequence};

// ============================================================================
// INSERTION
// ============================================================================

#[test]
fn insert_at_places_item_and_shifts_tail() {
    let mut list = list_of(&['a', 'b', 'd']);
    list.insert_at(2, 'c').unwrap();

    assert_eq!(snapshot(&list), vec!['a', 'b', 'c', 'd']);
    assert_list_well_formed(&list);
}

#[test]
fn insert_at_size_appends() {
    let mut list = list_of(&[1, 2]);
    list.insert_at(2, 3).unwrap();
    assert_eq!(snapshot(&list), vec![1, 2, 3]);
}

#[test]
fn insert_first_then_remove_first_round_trips() {
    let mut list = list_of(&["b", "c"]);
    list.insert_first("a").unwrap();
    assert_eq!(list.first(), Ok(&"a"));

    assert_eq!(list.remove_first(), Ok("a"));
    assert_eq!(snapshot(&list), vec!["b", "c"]);
}

#[test]
fn insert_last_then_remove_last_round_trips() {
    let mut list = list_of(&["a", "b"]);
    list.insert_last("z").unwrap();
    assert_eq!(list.last(), Ok(&"z"));

    assert_eq!(list.remove_last(), Ok("z"));
    assert_eq!(snapshot(&list), vec!["a", "b"]);
}

#[test]
fn insert_after_places_item_right_after_first_match() {
    let mut list = list_of(&[1, 2, 1]);
    assert_eq!(list.insert_after(&1, 9), Ok(true));

    assert_eq!(snapshot(&list), vec![1, 9, 2, 1]);
}

#[test]
fn insert_after_last_element_appends() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(list.insert_after(&2, 3), Ok(true));
    assert_eq!(list.last(), Ok(&3));
}

#[test]
fn insert_after_missing_element_changes_nothing() {
    let mut list = list_of(&[1, 2, 3]);
    let before = list.clone();

    assert_eq!(list.insert_after(&7, 9), Ok(false));
    assert_eq!(list, before);
    assert_eq!(list.capacity(), before.capacity());
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn remove_at_returns_element_and_closes_gap() {
    let mut list = list_of(&["a", "b", "c", "d"]);
    assert_eq!(list.remove_at(1), Ok("b"));
    assert_eq!(snapshot(&list), vec!["a", "c", "d"]);
    assert_list_well_formed(&list);
}

#[test]
fn remove_last_keeps_remaining_positions() {
    let mut list = counting(5);
    list.remove_last().unwrap();

    for i in 0..4 {
        assert_eq!(list.get(i), Ok(&i));
    }
}

#[test]
fn remove_value_removes_first_match_only() {
    let mut list = list_of(&[3, 1, 3, 2]);
    assert!(list.remove_value(&3));
    assert_eq!(snapshot(&list), vec![1, 3, 2]);
}

#[test]
fn remove_value_missing_returns_false() {
    let mut list = list_of(&[1, 2]);
    assert!(!list.remove_value(&5));
    assert_eq!(list.size(), 2);
}

#[test]
fn drain_from_the_front_empties_the_list() {
    let mut list = counting(25);
    for expected in 0..25 {
        assert_eq!(list.remove_first(), Ok(expected));
    }
    assert!(list.is_empty());
    assert_list_well_formed(&list);
}

// ============================================================================
// ACCESS
// ============================================================================

#[test]
fn set_replaces_and_returns_previous() {
    let mut list = list_of(&["x", "y"]);
    assert_eq!(list.set(1, "z"), Ok("y"));
    assert_eq!(snapshot(&list), vec!["x", "z"]);
}

#[test]
fn first_and_last_on_single_element_agree() {
    let list = list_of(&[42]);
    assert_eq!(list.first(), list.last());
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn index_of_returns_lowest_matching_position() {
    let list = list_of(&['a', 'b', 'a', 'b']);
    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.index_of(&'a'), Some(0));
}

#[test]
fn index_of_absent_element_is_none() {
    let list = list_of(&['a', 'b']);
    assert_eq!(list.index_of(&'q'), None);
    assert!(!list.contains(&'q'));
    assert!(list.contains(&'b'));
}

#[test]
fn absent_probe_is_a_miss() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(list.index_of(None), None);
    assert!(!list.contains(None));
    assert!(!list.remove_value(None));
    assert_eq!(list.size(), 2);
}

#[test]
fn search_uses_element_equality() {
    let list: ArrayList<String> = ["alpha", "beta"].iter().map(|s| s.to_string()).collect();
    assert_eq!(list.index_of(&"beta".to_string()), Some(1));
}

// ============================================================================
// CLEAR
// ============================================================================

#[test]
fn clear_resets_size_and_allows_reuse() {
    let mut list = counting(12);
    let capacity = list.capacity();

    list.clear();
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
    assert_eq!(list.capacity(), capacity);

    list.insert_last(7).unwrap();
    assert_eq!(snapshot(&list), vec![7]);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn clear_on_empty_list_is_harmless() {
    let mut list: ArrayList<u8> = ArrayList::new();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), arrayseq::DEFAULT_CAPACITY);
}
