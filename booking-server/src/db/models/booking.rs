//! Booking record (db representation)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Booking, BookingCreate, BookingStatus, Branch};
use surrealdb::RecordId;

/// Stored booking document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: Branch,
    /// Calendar date as "YYYY-MM-DD"; ISO ordering makes range
    /// queries plain string comparisons
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub occasion: Option<String>,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub approval_note: Option<String>,
    #[serde(default)]
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Build a fresh pending record from a public submission
    pub fn from_create(data: BookingCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            branch: data.branch,
            date: data.date,
            time: data.time,
            guests: data.guests,
            occasion: data.occasion,
            message: data.message,
            status: BookingStatus::Pending,
            approval_note: None,
            closed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<BookingRecord> for Booking {
    fn from(r: BookingRecord) -> Self {
        Booking {
            id: r.id.as_ref().map(|id| id.key().to_string()),
            name: r.name,
            email: r.email,
            phone: r.phone,
            branch: r.branch,
            date: r.date,
            time: r.time,
            guests: r.guests,
            occasion: r.occasion,
            message: r.message,
            status: r.status,
            approval_note: r.approval_note,
            closed: r.closed,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Fields written by a lifecycle transition (MERGE semantics: only
/// present fields change)
#[derive(Debug, Clone, Serialize)]
pub struct TransitionPatch {
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl TransitionPatch {
    /// Extract the patch for a transitioned booking
    pub fn from_updated(updated: &Booking) -> Self {
        Self {
            status: updated.status,
            approval_note: updated.approval_note.clone(),
            closed: updated.closed.then_some(true),
            updated_at: updated.updated_at,
        }
    }
}
