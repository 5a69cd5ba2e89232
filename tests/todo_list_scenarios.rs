//! End-to-end behaviour of the list aggregate through its public API.

mod common;

use std::sync::Arc;

use common::{date, new_list};
use rust_decimal::Decimal;
use todo_tracker::adapters::categories::SharedCategorySource;
use todo_tracker::domain::models::TodoList;
use todo_tracker::domain::specifications::CanModifySpecification;
use todo_tracker::TodoError;

fn pct(value: i64) -> Decimal {
    Decimal::from(value)
}

#[test]
fn test_add_item_then_list() {
    let mut list = new_list();
    list.add_item(1, "Buy milk", "desc", "Work").unwrap();

    let items = list.get_all_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), 1);
    assert_eq!(items[0].title(), "Buy milk");
    assert_eq!(items[0].total_progress(), Decimal::ZERO);
    assert!(!items[0].is_completed());
    assert!(items[0].last_progression_date().is_none());
}

#[test]
fn test_progression_exceeding_total_rejected() {
    let mut list = new_list();
    list.add_item(1, "Buy milk", "desc", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(60)).unwrap();

    let err = list
        .register_progression(1, date(2024, 1, 2), pct(50))
        .unwrap_err();

    assert!(matches!(err, TodoError::InvalidProgression { id: 1, .. }));
    assert_eq!(list.get_item(1).unwrap().total_progress(), pct(60));
    assert_eq!(list.get_item(1).unwrap().progressions().len(), 1);
}

#[test]
fn test_update_blocked_past_threshold() {
    let mut list = new_list();
    list.add_item(1, "Buy milk", "desc", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(60)).unwrap();

    let err = list.update_item(1, "new desc").unwrap_err();

    assert!(matches!(err, TodoError::CannotModify { id: 1, .. }));
    assert_eq!(list.get_item(1).unwrap().description(), "desc");
}

#[test]
fn test_progression_going_back_in_time_rejected() {
    let mut list = new_list();
    list.add_item(1, "Buy milk", "desc", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(40)).unwrap();

    let err = list
        .register_progression(1, date(2023, 1, 1), pct(10))
        .unwrap_err();

    assert!(matches!(err, TodoError::InvalidProgression { .. }));
    assert_eq!(list.get_item(1).unwrap().total_progress(), pct(40));
}

#[test]
fn test_unknown_category_rejected() {
    let mut list = new_list();

    let err = list.add_item(2, "x", "y", "Unknown").unwrap_err();

    assert_eq!(err, TodoError::InvalidCategory("Unknown".to_string()));
    assert!(list.is_empty());
}

#[test]
fn test_remove_missing_item() {
    let mut list = new_list();
    assert_eq!(list.remove_item(999).unwrap_err(), TodoError::NotFound(999));
}

#[test]
fn test_items_sorted_regardless_of_insertion_order() {
    let mut list = new_list();
    for id in [5, 2, 9, 1, 7] {
        list.add_item(id, format!("Item {id}"), "", "Personal").unwrap();
    }

    let ids: Vec<_> = list.get_all_items().iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec![1, 2, 5, 7, 9]);
}

#[test]
fn test_threshold_is_monotonic() {
    let mut list = new_list();
    list.add_item(1, "Task", "desc", "Work").unwrap();

    list.register_progression(1, date(2024, 1, 1), pct(30)).unwrap();
    list.update_item(1, "still editable").unwrap();

    list.register_progression(1, date(2024, 1, 2), pct(21)).unwrap();
    assert!(matches!(
        list.update_item(1, "too late"),
        Err(TodoError::CannotModify { .. })
    ));
    assert!(matches!(
        list.remove_item(1),
        Err(TodoError::CannotModify { .. })
    ));

    // Later progress never reopens the item.
    list.register_progression(1, date(2024, 1, 3), pct(49)).unwrap();
    assert!(matches!(
        list.update_item(1, "still too late"),
        Err(TodoError::CannotModify { .. })
    ));
}

#[test]
fn test_exactly_fifty_percent_still_modifiable() {
    let mut list = new_list();
    list.add_item(1, "Task", "desc", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(50)).unwrap();

    list.update_item(1, "edited at half").unwrap();
    list.remove_item(1).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_total_exactly_one_hundred_accepted() {
    let mut list = new_list();
    list.add_item(1, "Task", "", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), Decimal::new(3333, 2))
        .unwrap();
    list.register_progression(1, date(2024, 1, 2), Decimal::new(3333, 2))
        .unwrap();

    let item = list
        .register_progression(1, date(2024, 1, 3), Decimal::new(3334, 2))
        .unwrap();
    assert_eq!(item.total_progress(), pct(100));
    assert!(item.is_completed());
}

#[test]
fn test_total_just_over_one_hundred_rejected() {
    let mut list = new_list();
    list.add_item(1, "Task", "", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(100)).unwrap();

    let err = list
        .register_progression(1, date(2024, 1, 2), Decimal::new(1, 2))
        .unwrap_err();
    assert!(matches!(err, TodoError::InvalidProgression { .. }));
}

#[test]
fn test_progress_allowed_after_freeze() {
    let mut list = new_list();
    list.add_item(1, "Task", "", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(80)).unwrap();

    let item = list
        .register_progression(1, date(2024, 1, 2), pct(20))
        .unwrap();
    assert!(item.is_completed());
}

#[test]
fn test_same_date_progression_rejected() {
    let mut list = new_list();
    list.add_item(1, "Task", "", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(10)).unwrap();

    assert!(matches!(
        list.register_progression(1, date(2024, 1, 1), pct(10)),
        Err(TodoError::InvalidProgression { .. })
    ));
}

#[test]
fn test_category_matching_ignores_case() {
    let mut list = new_list();
    let item = list.add_item(1, "Run", "", "HEALTH").unwrap();
    assert_eq!(item.category(), "HEALTH");
}

#[test]
fn test_duplicate_id_rejected_and_original_kept() {
    let mut list = new_list();
    list.add_item(1, "Original", "", "Work").unwrap();

    let err = list.add_item(1, "Replacement", "", "Work").unwrap_err();

    assert_eq!(err, TodoError::DuplicateId(1));
    assert_eq!(list.get_item(1).unwrap().title(), "Original");
}

#[test]
fn test_category_source_consulted_on_every_add() {
    let categories = Arc::new(SharedCategorySource::new(["Work"]));
    let mut list = TodoList::new(categories.clone());
    list.add_item(1, "Before", "", "Work").unwrap();

    categories.replace(["Garden"]);

    assert!(matches!(
        list.add_item(2, "After", "", "Work"),
        Err(TodoError::InvalidCategory(_))
    ));
    list.add_item(3, "Dig", "", "garden").unwrap();
    // Existing items keep the category they were accepted with.
    assert_eq!(list.get_item(1).unwrap().category(), "Work");
}

#[test]
fn test_custom_modify_threshold() {
    let mut list = new_list().with_modify_rule(CanModifySpecification::with_threshold(pct(20)));
    list.add_item(1, "Task", "", "Work").unwrap();
    list.register_progression(1, date(2024, 1, 1), pct(25)).unwrap();

    assert!(matches!(
        list.update_item(1, "blocked"),
        Err(TodoError::CannotModify { .. })
    ));
}

#[test]
fn test_next_id_follows_highest() {
    let mut list = new_list();
    assert_eq!(list.next_id(), Ok(1));
    list.add_item(10, "Ten", "", "Work").unwrap();
    list.add_item(3, "Three", "", "Work").unwrap();
    assert_eq!(list.next_id(), Ok(11));
}

#[test]
fn test_next_id_reports_exhaustion_at_max() {
    let mut list = new_list();
    list.add_item(u64::MAX, "Last", "", "Work").unwrap();

    assert_eq!(list.next_id(), Err(TodoError::IdsExhausted(u64::MAX)));
    // Explicit ids below the maximum are still accepted.
    list.add_item(1, "First", "", "Work").unwrap();
    assert_eq!(list.len(), 2);
}
