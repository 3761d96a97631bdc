//! Review record (db representation)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Branch, Review, ReviewCreate};
use surrealdb::RecordId;

/// Stored review document - immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub branch: Branch,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn from_create(data: ReviewCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: data.name,
            rating: data.rating,
            comment: data.comment,
            branch: data.branch,
            created_at: now,
        }
    }
}

impl From<ReviewRecord> for Review {
    fn from(r: ReviewRecord) -> Self {
        Review {
            id: r.id.as_ref().map(|id| id.key().to_string()),
            name: r.name,
            rating: r.rating,
            comment: r.comment,
            branch: r.branch,
            created_at: r.created_at,
        }
    }
}
