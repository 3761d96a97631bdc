//! Review Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::ReviewRecord;
use shared::models::{Review, ReviewCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: ReviewCreate) -> RepoResult<Review> {
        let record = ReviewRecord::from_create(data, chrono::Utc::now());
        let created: Option<ReviewRecord> = self
            .base
            .db()
            .create(TABLE)
            .content(record)
            .await?;
        created
            .map(Review::from)
            .ok_or_else(|| RepoError::Database("Failed to create review".into()))
    }

    /// 最近的评价，最新的排前
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Review>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} ORDER BY created_at DESC LIMIT $limit",
                TABLE
            ))
            .bind(("limit", limit))
            .await?;
        let records: Vec<ReviewRecord> = result.take(0)?;
        Ok(records.into_iter().map(Review::from).collect())
    }
}
