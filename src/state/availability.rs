//! Available-slot listing for the date filter page.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use crate::net::api::ApiError;
use crate::net::types::Slot;

#[derive(Clone, Debug, Default)]
pub struct AvailabilityState {
    /// Date the current `slots` belong to.
    pub date: Option<String>,
    pub slots: Vec<Slot>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AvailabilityState {
    /// Mark a fetch for `date` as in flight.
    pub fn start(&mut self, date: &str) {
        self.date = Some(date.to_owned());
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result unless a newer fetch for another date started.
    ///
    /// Returns `false` for stale results.
    pub fn apply(&mut self, date: &str, result: Result<Vec<Slot>, ApiError>) -> bool {
        if self.date.as_deref() != Some(date) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(slots) => {
                self.slots = slots.into_iter().filter(|s| !s.is_booked).collect();
                self.error = None;
            }
            Err(e) => {
                self.slots.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }
}
