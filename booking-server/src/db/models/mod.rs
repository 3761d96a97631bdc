//! Database record types
//!
//! Stored representations of bookings and reviews. Record IDs are
//! `surrealdb::RecordId`; wire models (`shared::models`) carry the
//! plain key string instead; conversion happens via `From`.

pub mod booking;
pub mod review;

pub use booking::{BookingRecord, TransitionPatch};
pub use review::ReviewRecord;
