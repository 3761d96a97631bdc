//! Report Model
//!
//! Snapshot aggregation over the full booking set, computed per
//! request. The admin UI exports the per-branch table as CSV with
//! columns `Branch, Total, Pending, Approved, Rejected, Cancelled`
//! (a client-side concern; the server only supplies [`BranchStats`]).

use super::Booking;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level summary counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_bookings: u32,
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub cancelled: u32,
    /// Sum of party sizes over all bookings, regardless of status
    pub total_guests: u32,
    /// totalGuests / totalBookings; 0 when there are no bookings
    pub avg_party_size: f64,
    /// Display estimate: revenue-per-guest policy constant x totalGuests
    pub revenue_estimate: f64,
}

/// Per-branch status breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchStats {
    pub total: u32,
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub cancelled: u32,
}

/// Per-date status breakdown (time series keyed by booking date)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub cancelled: u32,
    pub total: u32,
}

/// Per-month bucket (keyed by "YYYY-MM" of the booking date)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub bookings: u32,
    pub guests: u32,
    pub approved: u32,
    pub rejected: u32,
}

/// Recently-changed booking, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Current booking status ("pending", "approved", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// "{name} - {branch} - {display date}", e.g.
    /// "Alice - naran - Monday, March 2, 2026"
    pub description: String,
    /// updatedAt of the booking
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Full report payload for GET /api/admin/reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: ReportSummary,
    pub by_branch: BTreeMap<String, BranchStats>,
    /// Frequency table over the non-empty occasion field
    pub by_occasion: BTreeMap<String, u32>,
    pub by_date: BTreeMap<String, DailyStats>,
    pub monthly_stats: BTreeMap<String, MonthlyStats>,
    pub recent_activity: Vec<ActivityEntry>,
    /// Bookings with date >= today, ascending, excluding cancelled/rejected
    pub upcoming: Vec<Booking>,
}

/// Dashboard counters for GET /api/admin/dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    /// Bookings dated today
    pub today: u32,
    /// Bookings dated within the current ISO week
    pub this_week: u32,
    /// Bookings dated within the current calendar month
    pub this_month: u32,
    /// Bookings awaiting a decision
    pub pending: u32,
}
