#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use crate::net::api::ApiError;
use crate::net::types::Room;

/// Room directory listing backing the room selector.
#[derive(Clone, Debug, Default)]
pub struct RoomsState {
    pub items: Vec<Room>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RoomsState {
    /// Store the result of a directory fetch.
    pub fn apply(&mut self, result: Result<Vec<Room>, ApiError>) {
        self.loading = false;
        match result {
            Ok(rooms) => {
                self.items = rooms.into_iter().filter(|r| !r.is_deleted).collect();
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// `(id, name)` pairs offered by the room selector.
    pub fn options(&self) -> Vec<(String, String)> {
        self.items.iter().map(|r| (r.id.clone(), r.name.clone())).collect()
    }
}
