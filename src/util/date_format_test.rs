use super::*;
use time::macros::date;

#[test]
fn format_date_zero_pads_month_and_day() {
    assert_eq!(format_date(date!(2024 - 05 - 01)), "2024-05-01");
    assert_eq!(format_date(date!(2031 - 12 - 09)), "2031-12-09");
}

#[test]
fn parse_date_input_reads_canonical_form() {
    assert_eq!(parse_date_input("2024-05-01"), Some(date!(2024 - 05 - 01)));
    assert_eq!(parse_date_input(" 2024-05-01 "), Some(date!(2024 - 05 - 01)));
}

#[test]
fn parse_date_input_treats_cleared_picker_as_no_selection() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("   "), None);
}

#[test]
fn parse_date_input_rejects_malformed_values() {
    assert_eq!(parse_date_input("2024-13-01"), None);
    assert_eq!(parse_date_input("2024-02-30"), None);
    assert_eq!(parse_date_input("01/05/2024"), None);
}

#[test]
fn format_then_parse_preserves_the_date() {
    let day = date!(2024 - 02 - 29);
    assert_eq!(parse_date_input(&format_date(day)), Some(day));
}

#[test]
fn today_formats_to_canonical_length() {
    assert_eq!(format_date(today()).len(), 10);
}
