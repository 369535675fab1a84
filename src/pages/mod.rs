//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates form and picker
//! behavior to `components`.

pub mod availability;
pub mod book_room;
pub mod create_slot;
