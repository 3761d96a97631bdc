//! Slot Model
//!
//! Slots are derived, never persisted: recomputed on every query
//! from the bookings in the date window.

use super::Branch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability tier for a slot
///
/// `Full` when nothing is available; `Limited` when availability has
/// dropped to the configured low-water mark or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Limited,
    Full,
}

/// Capacity tracking for one (branch, date, time) combination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub branch: Branch,
    pub date: NaiveDate,
    /// Time-of-day label (e.g. "7:00 PM")
    pub time: String,
    /// Total seats for this branch per slot
    pub capacity: u32,
    /// Sum of party sizes of pending + approved bookings
    pub booked: u32,
    /// max(0, capacity - booked)
    pub available: u32,
    pub status: SlotStatus,
}
