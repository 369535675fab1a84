//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`date`, `slot_form`, `toast`, etc.) so
//! individual components can depend on small focused models. Components hold
//! these models in `RwSignal`s and mutate them only through their methods.

pub mod availability;
pub mod date;
pub mod room_detail;
pub mod rooms;
pub mod slot_form;
pub mod toast;
