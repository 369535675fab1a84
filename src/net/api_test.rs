use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(rooms_endpoint("/api"), "/api/rooms");
    assert_eq!(room_endpoint("/api", "r1"), "/api/rooms/r1");
    assert_eq!(slots_endpoint("/api"), "/api/slots");
    assert_eq!(
        availability_endpoint("/api", "2024-05-01"),
        "/api/slots/availability?date=2024-05-01"
    );
}

#[test]
fn http_api_uses_configured_base_url() {
    let api = HttpApi::new(&ClientConfig::with_base_url("https://rooms.example.com/api/"));
    assert_eq!(api.base_url(), "https://rooms.example.com/api");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn unwrap_envelope_returns_data_on_success() {
    let body = ApiResponse { success: true, message: None, data: Some(vec![1, 2]) };
    assert_eq!(unwrap_envelope(body), Ok(vec![1, 2]));
}

#[test]
fn unwrap_envelope_rejects_unsuccessful_body() {
    let body: ApiResponse<Vec<u8>> =
        ApiResponse { success: false, message: Some("No Data Found".to_owned()), data: None };
    assert_eq!(unwrap_envelope(body), Err(ApiError::Rejected("No Data Found".to_owned())));
}

#[test]
fn unwrap_envelope_requires_data() {
    let body: ApiResponse<Vec<u8>> = ApiResponse { success: true, message: None, data: None };
    assert!(matches!(unwrap_envelope(body), Err(ApiError::Decode(_))));
}

// =============================================================
// Slot replies
// =============================================================

fn envelope(success: bool, message: Option<&str>) -> Result<ApiResponse<serde_json::Value>, String> {
    Ok(ApiResponse { success, message: message.map(str::to_owned), data: None })
}

#[test]
fn classify_slot_reply_success_flag_means_created() {
    assert_eq!(classify_slot_reply(true, 200, envelope(true, None)), Ok(SlotReply::Created));
}

#[test]
fn classify_slot_reply_success_false_is_rejected() {
    assert_eq!(
        classify_slot_reply(true, 200, envelope(false, Some("Slot overlaps"))),
        Ok(SlotReply::Rejected("Slot overlaps".to_owned()))
    );
}

#[test]
fn classify_slot_reply_error_status_uses_body_message() {
    assert_eq!(
        classify_slot_reply(false, 400, envelope(false, Some("Validation Error"))),
        Ok(SlotReply::Rejected("Validation Error".to_owned()))
    );
}

#[test]
fn classify_slot_reply_error_status_without_body_uses_status() {
    assert_eq!(
        classify_slot_reply(false, 502, Err("not json".to_owned())),
        Ok(SlotReply::Rejected("request failed: 502".to_owned()))
    );
}

#[test]
fn classify_slot_reply_undecodable_success_is_an_error() {
    assert_eq!(
        classify_slot_reply(true, 200, Err("eof".to_owned())),
        Err(ApiError::Decode("eof".to_owned()))
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let api = HttpApi::new(&ClientConfig::default());
    let request = TimeSlotRequest {
        room: "r1".to_owned(),
        date: "2024-05-01".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "10:00".to_owned(),
    };
    assert_eq!(futures::executor::block_on(api.create_slot(&request)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.list_rooms()), Err(ApiError::Unavailable));
}
