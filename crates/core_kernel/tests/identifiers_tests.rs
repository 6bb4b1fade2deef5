//! Unit tests for run identifiers

use std::collections::HashSet;

use core_kernel::RunId;

#[test]
fn test_new_v7_generates_unique_ids() {
    let ids: HashSet<RunId> = (0..64).map(|_| RunId::new_v7()).collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn test_displayed_ids_sort_by_creation_time() {
    let first = RunId::new_v7().to_string();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = RunId::new_v7().to_string();

    assert!(first < second, "{} should sort before {}", first, second);
}
