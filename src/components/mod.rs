//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the booking forms and feedback surfaces. Shared date
//! state is handed to them as an explicit prop; the API client and the toast
//! surface come from Leptos context.

pub mod calendar;
pub mod date_filter;
pub mod slot_form;
pub mod toaster;
