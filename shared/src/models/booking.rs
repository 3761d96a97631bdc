//! Booking Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Restaurant branch (fixed set of physical locations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Naran,
    Besar,
}

impl Branch {
    /// All branches, in display order
    pub const ALL: [Branch; 2] = [Branch::Naran, Branch::Besar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Naran => "naran",
            Branch::Besar => "besar",
        }
    }

    /// Human-readable name, as shown on the site and in emails
    pub fn display_name(&self) -> &'static str {
        match self {
            Branch::Naran => "Naran Branch",
            Branch::Besar => "Besar Branch",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naran" => Ok(Branch::Naran),
            "besar" => Ok(Branch::Besar),
            other => Err(format!("Unknown branch: {}", other)),
        }
    }
}

/// Booking status
///
/// Transitions: pending -> approved | rejected; any non-deleted ->
/// cancelled (via close). "Cancelled" means the booking was
/// withdrawn; "rejected" means the restaurant declined. The two are
/// never conflated. Deletion removes the record entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this status occupies slot capacity
    pub fn consumes_capacity(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Approved)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking record - a table reservation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Option<String>,
    /// Customer name
    pub name: String,
    /// Customer email (notification target)
    pub email: String,
    /// Customer phone
    pub phone: String,
    pub branch: Branch,
    /// Reservation date (time-zone-naive calendar date)
    pub date: NaiveDate,
    /// Time-of-day label, one of the configured slot times (e.g. "7:00 PM")
    pub time: String,
    /// Party size, always > 0
    pub guests: u32,
    /// Optional occasion tag (birthday, anniversary, ...)
    pub occasion: Option<String>,
    /// Optional free-text message from the customer
    pub message: Option<String>,
    pub status: BookingStatus,
    /// Free-text note attached on approve/reject, shown to the customer
    pub approval_note: Option<String>,
    /// Set when the booking is closed (cancelled)
    #[serde(default)]
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create booking payload (public submission, always starts pending)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: Branch,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub occasion: Option<String>,
    pub message: Option<String>,
}

/// Approve/reject payload
///
/// The admin UI historically posted the note under `reason`; both
/// keys are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingActionPayload {
    #[serde(default, alias = "reason")]
    pub note: Option<String>,
}
