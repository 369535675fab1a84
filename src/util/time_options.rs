//! Selectable time-of-day labels for the slot start/end pickers.

#[cfg(test)]
#[path = "time_options_test.rs"]
mod time_options_test;

/// Minutes between two consecutive selectable labels.
pub const STEP_MINUTES: u32 = 30;

/// Every selectable `HH:MM` label, in day order.
pub fn time_options() -> Vec<String> {
    (0..24 * 60)
        .step_by(STEP_MINUTES as usize)
        .map(|minutes: u32| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}

/// Whether `label` is one of the labels produced by [`time_options`].
pub fn is_time_option(label: &str) -> bool {
    let Some((hours, minutes)) = label.split_once(':') else {
        return false;
    };
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return false;
    }
    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) => h < 24 && m < 60 && m % STEP_MINUTES == 0,
        _ => false,
    }
}
