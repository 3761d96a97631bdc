//! Review Model

use super::Branch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Valid rating range (inclusive)
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Customer review - immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Option<String>,
    /// Author name
    pub name: String,
    /// Star rating, 1-5 inclusive
    pub rating: u8,
    pub comment: String,
    pub branch: Branch,
    pub created_at: DateTime<Utc>,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub branch: Branch,
}

/// Review listing with the average rating over the returned page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewList {
    pub reviews: Vec<Review>,
    pub average_rating: f64,
}
