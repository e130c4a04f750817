use super::ChecklistState;

#[test]
fn items_start_unchecked() {
    let state = ChecklistState::new();
    assert!(!state.is_checked("proof-of-residence"));
    assert_eq!(state.checked_count(), 0);
}

#[test]
fn toggle_flips_an_item_both_ways() {
    let mut state = ChecklistState::new();
    state.toggle("proof-of-residence");
    assert!(state.is_checked("proof-of-residence"));
    state.toggle("proof-of-residence");
    assert!(!state.is_checked("proof-of-residence"));
}

#[test]
fn items_toggle_independently() {
    let mut state = ChecklistState::new();
    state.toggle("birth-certificate");
    state.toggle("social-security-card");
    state.toggle("birth-certificate");
    assert!(!state.is_checked("birth-certificate"));
    assert!(state.is_checked("social-security-card"));
    assert_eq!(state.checked_count(), 1);
}
