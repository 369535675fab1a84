use super::*;

// =============================================================
// Helpers
// =============================================================

fn room_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "r1",
        "name": "Alpha",
        "floorNo": 3,
        "roomNo": 301,
        "capacity": 12,
        "pricePerSlot": 150.5,
        "amenities": ["Projector", "Whiteboard"],
        "isDeleted": false
    })
}

// =============================================================
// Room
// =============================================================

#[test]
fn room_deserializes_backend_field_names() {
    let room: Room = serde_json::from_value(room_json()).unwrap();
    assert_eq!(room.id, "r1");
    assert_eq!(room.name, "Alpha");
    assert_eq!(room.floor_no, 3);
    assert_eq!(room.room_no, 301);
    assert_eq!(room.capacity, 12);
    assert!((room.price_per_slot - 150.5).abs() < f64::EPSILON);
    assert_eq!(room.amenities, vec!["Projector".to_owned(), "Whiteboard".to_owned()]);
    assert!(!room.is_deleted);
}

#[test]
fn room_tolerates_missing_optional_fields() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r2",
        "name": "Beta",
        "floorNo": 1,
        "roomNo": 12,
        "capacity": 4,
        "pricePerSlot": 20
    }))
    .unwrap();
    assert!(room.amenities.is_empty());
    assert!(!room.is_deleted);
}

// =============================================================
// TimeSlotRequest
// =============================================================

#[test]
fn time_slot_request_serializes_camel_case() {
    let req = TimeSlotRequest {
        room: "r1".to_owned(),
        date: "2024-05-01".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "10:00".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "room": "r1",
            "date": "2024-05-01",
            "startTime": "09:00",
            "endTime": "10:00"
        })
    );
}

// =============================================================
// Slot
// =============================================================

#[test]
fn slot_accepts_bare_room_id() {
    let slot: Slot = serde_json::from_value(serde_json::json!({
        "_id": "s1",
        "room": "r1",
        "date": "2024-05-01",
        "startTime": "09:00",
        "endTime": "09:30"
    }))
    .unwrap();
    assert_eq!(slot.room, SlotRoom::Id("r1".to_owned()));
    assert_eq!(slot.room.id(), "r1");
    assert_eq!(slot.room.name(), None);
    assert!(!slot.is_booked);
}

#[test]
fn slot_accepts_populated_room() {
    let slot: Slot = serde_json::from_value(serde_json::json!({
        "_id": "s2",
        "room": room_json(),
        "date": "2024-05-01",
        "startTime": "10:00",
        "endTime": "10:30",
        "isBooked": true
    }))
    .unwrap();
    assert_eq!(slot.room.id(), "r1");
    assert_eq!(slot.room.name(), Some("Alpha"));
    assert!(slot.is_booked);
}

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn api_response_reads_success_envelope() {
    let resp: ApiResponse<Vec<Room>> = serde_json::from_value(serde_json::json!({
        "success": true,
        "statusCode": 200,
        "message": "Rooms retrieved successfully",
        "data": [room_json()]
    }))
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.message.as_deref(), Some("Rooms retrieved successfully"));
    assert_eq!(resp.data.map(|rooms| rooms.len()), Some(1));
}

#[test]
fn api_response_allows_missing_data() {
    let resp: ApiResponse<Room> = serde_json::from_value(serde_json::json!({
        "success": false,
        "message": "Room not found"
    }))
    .unwrap();
    assert!(!resp.success);
    assert!(resp.data.is_none());
}
