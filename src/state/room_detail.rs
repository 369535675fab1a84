//! Single-room fetch state for the booking page.

#[cfg(test)]
#[path = "room_detail_test.rs"]
mod room_detail_test;

use crate::net::api::ApiError;
use crate::net::types::Room;

/// Fetch state for one room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomDetailState {
    pub room: Option<Room>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for RoomDetailState {
    fn default() -> Self {
        Self { room: None, loading: true, error: None }
    }
}

/// What the booking page should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoomPhase<'a> {
    Loading,
    Ready(&'a Room),
    Unavailable(&'a str),
}

impl RoomDetailState {
    /// Forget the previous room before fetching another one.
    pub fn start(&mut self) {
        self.room = None;
        self.error = None;
        self.loading = true;
    }

    pub fn apply(&mut self, result: Result<Room, ApiError>) {
        self.loading = false;
        match result {
            Ok(room) => {
                self.room = Some(room);
                self.error = None;
            }
            Err(e) => {
                self.room = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn phase(&self) -> RoomPhase<'_> {
        if self.loading {
            return RoomPhase::Loading;
        }
        match (&self.room, &self.error) {
            (Some(room), _) => RoomPhase::Ready(room),
            (None, Some(e)) => RoomPhase::Unavailable(e),
            (None, None) => RoomPhase::Unavailable("Room not found."),
        }
    }
}
