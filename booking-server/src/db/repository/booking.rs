//! Booking Repository
//!
//! 预订表的 CRUD 操作，状态流转使用条件更新保证原子性。

use super::{BaseRepository, RepoResult};
use crate::db::models::{BookingRecord, TransitionPatch};
use chrono::NaiveDate;
use shared::models::{Booking, BookingCreate, BookingStatus, Branch};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 创建新预订（初始状态为 pending）
    pub async fn create(&self, data: BookingCreate) -> RepoResult<Booking> {
        let record = BookingRecord::from_create(data, chrono::Utc::now());
        let created: Option<BookingRecord> = self
            .base
            .db()
            .create(TABLE)
            .content(record)
            .await?;
        created
            .map(Booking::from)
            .ok_or_else(|| super::RepoError::Database("Failed to create booking".into()))
    }

    /// 查询所有预订，最新创建的排前，可按状态/分店过滤
    pub async fn find_all(
        &self,
        status: Option<BookingStatus>,
        branch: Option<Branch>,
    ) -> RepoResult<Vec<Booking>> {
        let mut conditions = Vec::new();
        if status.is_some() {
            conditions.push("status = $status");
        }
        if branch.is_some() {
            conditions.push("branch = $branch");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT * FROM {}{} ORDER BY created_at DESC",
            TABLE, where_clause
        );

        let mut qb = self.base.db().query(sql);
        if let Some(status) = status {
            qb = qb.bind(("status", status.as_str()));
        }
        if let Some(branch) = branch {
            qb = qb.bind(("branch", branch.as_str()));
        }
        let mut result = qb.await?;
        let records: Vec<BookingRecord> = result.take(0)?;
        Ok(records.into_iter().map(Booking::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let record: Option<BookingRecord> = self
            .base
            .db()
            .select(RecordId::from_table_key(TABLE, id))
            .await?;
        Ok(record.map(Booking::from))
    }

    /// 查询日期窗口内占用容量的预订（pending + approved），用于时段计算
    pub async fn find_in_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Booking>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} WHERE date >= $start AND date <= $end AND status IN ['pending', 'approved']",
                TABLE
            ))
            .bind(("start", start))
            .bind(("end", end))
            .await?;
        let records: Vec<BookingRecord> = result.take(0)?;
        Ok(records.into_iter().map(Booking::from).collect())
    }

    /// 条件更新：仅当当前状态在 `expected` 中时应用补丁
    ///
    /// 返回 `None` 表示预订已被并发修改（或状态不符），调用方应报冲突。
    pub async fn update_transition(
        &self,
        id: &str,
        expected: &[BookingStatus],
        patch: TransitionPatch,
    ) -> RepoResult<Option<Booking>> {
        let expected: Vec<String> = expected.iter().map(|s| s.as_str().to_string()).collect();
        let mut result = self
            .base
            .db()
            .query("UPDATE $booking MERGE $patch WHERE status IN $expected RETURN AFTER")
            .bind(("booking", RecordId::from_table_key(TABLE, id)))
            .bind(("patch", patch))
            .bind(("expected", expected))
            .await?;
        let updated: Vec<BookingRecord> = result.take(0)?;
        Ok(updated.into_iter().next().map(Booking::from))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<BookingRecord> = self
            .base
            .db()
            .delete(RecordId::from_table_key(TABLE, id))
            .await?;
        Ok(deleted.is_some())
    }
}
