//! Wire DTOs for the booking API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless. Rooms and slots are owned by the remote directory; the client only
//! ever holds transient copies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bookable room as listed by the room directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Opaque directory identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub floor_no: u32,
    pub room_no: u32,
    /// Number of people the room seats.
    pub capacity: u32,
    pub price_per_slot: f64,
    /// Display-only amenity labels, in directory order.
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Payload for `POST /slots`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRequest {
    /// Room identifier.
    pub room: String,
    /// Canonical `YYYY-MM-DD` date.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Room reference on a slot: either the bare id or the populated record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotRoom {
    Populated(Room),
    Id(String),
}

impl SlotRoom {
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(room) => &room.id,
            Self::Id(id) => id,
        }
    }

    /// Room name when the backend populated it.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated(room) => Some(&room.name),
            Self::Id(_) => None,
        }
    }
}

/// A time slot as returned by the availability endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    pub room: SlotRoom,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_booked: bool,
}

/// Response envelope wrapping every backend reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}
