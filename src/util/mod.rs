//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep date and time-label handling out of page and component
//! logic so the form workflow can be tested without a browser.

pub mod date_format;
pub mod time_options;
