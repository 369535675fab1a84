//! REST API clients for the room directory and slot endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Slot creation separates a structured reply from the backend
//! ([`SlotReply`]) from a call that failed outright (`Err(ApiError)`), so the
//! form can tell a rejected request apart from a broken connection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Room, Slot, TimeSlotRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiResponse;
use crate::config::ClientConfig;

/// Failure of a call to the booking API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Structured answer to a slot creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotReply {
    Created,
    Rejected(String),
}

/// Read access to the remote room directory.
#[async_trait(?Send)]
pub trait RoomDirectory {
    /// Every bookable room, in directory order.
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;

    /// A single room by its directory id.
    async fn get_room(&self, id: &str) -> Result<Room, ApiError>;
}

/// Slot creation and availability lookups.
#[async_trait(?Send)]
pub trait SlotClient {
    /// Ask the backend to create a slot.
    ///
    /// # Errors
    ///
    /// Returns an error when the call itself fails (network, malformed reply).
    /// A refusal by the backend is `Ok(SlotReply::Rejected(_))`.
    async fn create_slot(&self, request: &TimeSlotRequest) -> Result<SlotReply, ApiError>;

    /// Slots still open on `date` (canonical `YYYY-MM-DD`).
    async fn list_available_slots(&self, date: &str) -> Result<Vec<Slot>, ApiError>;
}

/// HTTP implementation of [`RoomDirectory`] and [`SlotClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rooms_endpoint(base: &str) -> String {
    format!("{base}/rooms")
}

#[cfg(any(test, feature = "hydrate"))]
fn room_endpoint(base: &str, id: &str) -> String {
    format!("{base}/rooms/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn slots_endpoint(base: &str) -> String {
    format!("{base}/slots")
}

#[cfg(any(test, feature = "hydrate"))]
fn availability_endpoint(base: &str, date: &str) -> String {
    format!("{base}/slots/availability?date={date}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Take the payload out of a successful envelope.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_envelope<T>(body: ApiResponse<T>) -> Result<T, ApiError> {
    if !body.success {
        return Err(ApiError::Rejected(body.message.unwrap_or_else(|| "request rejected".to_owned())));
    }
    body.data.ok_or_else(|| ApiError::Decode("missing data".to_owned()))
}

/// Classify the reply to `POST /slots`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_slot_reply(
    status_ok: bool,
    status: u16,
    body: Result<ApiResponse<serde_json::Value>, String>,
) -> Result<SlotReply, ApiError> {
    if !status_ok {
        let message = body
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| request_failed_message(status));
        return Ok(SlotReply::Rejected(message));
    }
    let body = body.map_err(ApiError::Decode)?;
    if body.success {
        Ok(SlotReply::Created)
    } else {
        Ok(SlotReply::Rejected(body.message.unwrap_or_else(|| "request rejected".to_owned())))
    }
}

#[cfg(feature = "hydrate")]
async fn get_data<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if !resp.ok() {
        let message = resp
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| request_failed_message(status));
        return Err(ApiError::Status { status, message });
    }
    let body: ApiResponse<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    unwrap_envelope(body)
}

#[async_trait(?Send)]
impl RoomDirectory for HttpApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_data(&rooms_endpoint(&self.base_url)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get_room(&self, id: &str) -> Result<Room, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_data(&room_endpoint(&self.base_url, id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl SlotClient for HttpApi {
    async fn create_slot(&self, request: &TimeSlotRequest) -> Result<SlotReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&slots_endpoint(&self.base_url))
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body = resp
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .map_err(|e| e.to_string());
            classify_slot_reply(resp.ok(), resp.status(), body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_available_slots(&self, date: &str) -> Result<Vec<Slot>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_data(&availability_endpoint(&self.base_url, date)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = date;
            Err(ApiError::Unavailable)
        }
    }
}
