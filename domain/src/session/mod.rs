//! Session domain.
//!
//! - [`record::InteractionRecord`]: one successful interaction
//! - [`history::SessionHistory`]: append-only list of records
//! - [`state::SessionState`]: per-task histories owned by one session

pub mod history;
pub mod record;
pub mod state;
