use time::macros::date;

use super::*;

#[test]
fn form_date_pick_updates_form_and_shared_date() {
    let mut form = SlotForm::new(date!(2024 - 04 - 30));
    let mut shared = DateState::new(date!(2024 - 04 - 30));

    assert!(apply_form_date_pick(&mut form, &mut shared, Some(date!(2024 - 05 - 01))));

    assert_eq!(form.current_date, "2024-05-01");
    assert_eq!(shared.canonical(), "2024-05-01");
    assert_eq!(shared.selected(), date!(2024 - 05 - 01));
}

#[test]
fn cleared_form_date_pick_changes_nothing() {
    let mut form = SlotForm::new(date!(2024 - 04 - 30));
    let mut shared = DateState::new(date!(2024 - 04 - 30));

    assert!(!apply_form_date_pick(&mut form, &mut shared, None));

    assert_eq!(form.current_date, "2024-04-30");
    assert_eq!(shared.canonical(), "2024-04-30");
}
