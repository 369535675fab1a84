//! The date every date-scoped view is currently looking at.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<DateState>` and passes it explicitly to the
//! slot form and the availability filter. [`DateState::set`] is the only
//! writer, so the canonical string can never drift from the selected date.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;

use crate::util::date_format::{format_date, today};

/// Currently selected date and its canonical string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateState {
    selected: Date,
    canonical: String,
}

impl Default for DateState {
    fn default() -> Self {
        Self::new(today())
    }
}

impl DateState {
    pub fn new(date: Date) -> Self {
        Self { selected: date, canonical: format_date(date) }
    }

    pub fn selected(&self) -> Date {
        self.selected
    }

    /// Canonical `YYYY-MM-DD` form of the selected date.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Replace the selected date.
    pub fn set(&mut self, date: Date) {
        self.selected = date;
        self.canonical = format_date(date);
    }
}
