//! Admin Report API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::reports::{ReportPolicy, build_report};
use crate::utils::{AppResult, ok, time};
use shared::ApiResponse;
use shared::models::Report;

/// GET /api/admin/reports - 全量汇总报表
///
/// 每次请求对全表重新聚合。预订量在单店规模下很小，
/// 不做增量缓存。
pub async fn report(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Report>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = repo.find_all(None, None).await?;

    let policy = ReportPolicy {
        revenue_per_guest: state.config.revenue_per_guest,
        recent_limit: state.config.recent_activity_limit,
        upcoming_limit: state.config.upcoming_limit,
    };
    Ok(ok(build_report(&bookings, time::today(), &policy)))
}
