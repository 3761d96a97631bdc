//! Admin Dashboard API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::reports::dashboard_counts;
use crate::utils::{AppResult, ok, time};
use shared::ApiResponse;
use shared::models::DashboardCounts;

/// GET /api/admin/dashboard - 今日/本周/本月/待审核计数
pub async fn counts(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<DashboardCounts>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = repo.find_all(None, None).await?;
    Ok(ok(dashboard_counts(&bookings, time::today())))
}
