use super::*;
use time::macros::date;

#[test]
fn new_date_state_derives_canonical_string() {
    let state = DateState::new(date!(2024 - 05 - 01));
    assert_eq!(state.selected(), date!(2024 - 05 - 01));
    assert_eq!(state.canonical(), "2024-05-01");
}

#[test]
fn default_date_state_is_today() {
    let state = DateState::default();
    assert_eq!(state.selected(), today());
    assert_eq!(state.canonical(), format_date(today()));
}

#[test]
fn set_overwrites_both_fields() {
    let mut state = DateState::new(date!(2024 - 05 - 01));
    state.set(date!(2024 - 12 - 31));
    assert_eq!(state.selected(), date!(2024 - 12 - 31));
    assert_eq!(state.canonical(), "2024-12-31");
}
