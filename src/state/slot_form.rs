//! Slot creation form state and submission lifecycle.
//!
//! ARCHITECTURE
//! ============
//! A submission runs in three steps. [`SlotForm::begin_submit`] validates the
//! current selections and yields a request. [`submit_slot`] performs the
//! remote call and reports progress through toasts. [`SlotForm::finish_submit`]
//! records the outcome. The component glues the steps together around a
//! `spawn_local`, keeping the form state free of async concerns.
//!
//! TRADE-OFFS
//! ==========
//! End times are not checked against start times. The selects only offer
//! fixed labels and the backend owns slot consistency, so the form stays
//! permissive here.

#[cfg(test)]
#[path = "slot_form_test.rs"]
mod slot_form_test;

use time::Date;

use crate::net::api::{ApiError, SlotClient, SlotReply};
use crate::net::types::TimeSlotRequest;
use crate::state::toast::{LoadingToast, Notify, ToastKind};
use crate::util::date_format::{format_date, today};
use crate::util::time_options::is_time_option;

pub const CREATING_MESSAGE: &str = "Creating slot...";
pub const CREATED_MESSAGE: &str = "Slot is Created";
pub const FAILED_MESSAGE: &str = "Failed To Create Slot";
pub const ERRORED_MESSAGE: &str = "An error occurred while creating the slot.";

/// Why a submission was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a room.")]
    MissingRoom,
    #[error("Please select both start and end times.")]
    MissingTimes,
}

/// Where the most recent submission stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Success,
    /// The backend answered with an error.
    Failed(String),
    /// The call itself failed.
    Errored(String),
}

impl SubmissionOutcome {
    pub fn from_reply(reply: Result<SlotReply, ApiError>) -> Self {
        match reply {
            Ok(SlotReply::Created) => Self::Success,
            Ok(SlotReply::Rejected(reason)) => Self::Failed(reason),
            Err(e) => Self::Errored(e.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Toast announcing this outcome, if it is a final one.
    pub fn notice(&self) -> Option<(ToastKind, &'static str)> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Success => Some((ToastKind::Success, CREATED_MESSAGE)),
            Self::Failed(_) => Some((ToastKind::Error, FAILED_MESSAGE)),
            Self::Errored(_) => Some((ToastKind::Warning, ERRORED_MESSAGE)),
        }
    }
}

/// Selections and feedback for the slot creation form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotForm {
    /// Date highlighted in the calendar.
    pub date: Date,
    /// Canonical form of `date`, used in the request payload.
    pub current_date: String,
    /// Selected room id; empty until a room is picked.
    pub room_id: String,
    pub start_time: String,
    pub end_time: String,
    pub error: Option<ValidationError>,
    pub status: SubmissionOutcome,
}

impl Default for SlotForm {
    fn default() -> Self {
        Self::new(today())
    }
}

impl SlotForm {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            current_date: format_date(date),
            room_id: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            error: None,
            status: SubmissionOutcome::Idle,
        }
    }

    /// Select a room by id. The empty string clears the selection.
    pub fn select_room(&mut self, room_id: String) {
        self.room_id = room_id;
    }

    /// Select a start label. Labels outside the fixed set are ignored.
    pub fn select_start_time(&mut self, label: String) {
        if label.is_empty() || is_time_option(&label) {
            self.start_time = label;
        }
    }

    /// Select an end label. Labels outside the fixed set are ignored.
    pub fn select_end_time(&mut self, label: String) {
        if label.is_empty() || is_time_option(&label) {
            self.end_time = label;
        }
    }

    /// Apply a calendar pick; `None` (a cleared picker) leaves the form as is.
    ///
    /// Returns the applied date so the caller can publish it.
    pub fn select_date(&mut self, pick: Option<Date>) -> Option<Date> {
        let date = pick?;
        self.date = date;
        self.current_date = format_date(date);
        Some(date)
    }

    /// Check the selections and build the request they describe.
    pub fn validate(&self) -> Result<TimeSlotRequest, ValidationError> {
        if self.room_id.is_empty() {
            return Err(ValidationError::MissingRoom);
        }
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return Err(ValidationError::MissingTimes);
        }
        Ok(TimeSlotRequest {
            room: self.room_id.clone(),
            date: self.current_date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        })
    }

    /// Whether the submit action is available.
    pub fn can_submit(&self) -> bool {
        !self.status.is_pending()
    }

    /// Start a submission.
    ///
    /// Returns `None` while another submission is pending or when validation
    /// fails; the latter leaves the reason in `error`.
    pub fn begin_submit(&mut self) -> Option<TimeSlotRequest> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        match self.validate() {
            Ok(request) => {
                self.status = SubmissionOutcome::Pending;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Record the outcome of the submission started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        self.status = outcome;
    }
}

/// Send `request` and report progress through `notices`.
///
/// A loading toast is shown for the duration of the call and exactly one
/// outcome toast follows. Never fails: transport errors become
/// [`SubmissionOutcome::Errored`].
pub async fn submit_slot<C, N>(client: &C, request: &TimeSlotRequest, notices: &N) -> SubmissionOutcome
where
    C: SlotClient + ?Sized,
    N: Notify + ?Sized,
{
    let loading = LoadingToast::show(notices, CREATING_MESSAGE);
    let reply = client.create_slot(request).await;
    match &reply {
        Ok(SlotReply::Created) => log::debug!("slot created: room={} date={}", request.room, request.date),
        Ok(SlotReply::Rejected(reason)) => log::warn!("slot rejected: {reason}"),
        Err(e) => log::error!("slot request failed: {e}"),
    }

    let outcome = SubmissionOutcome::from_reply(reply);
    if let Some((kind, message)) = outcome.notice() {
        notices.show(kind, message);
    }
    drop(loading);
    outcome
}
