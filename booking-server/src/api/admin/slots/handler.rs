//! Admin Slot API Handlers

use axum::{Json, extract::State};
use chrono::Days;
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::slots::compute_slots;
use crate::utils::{AppError, AppQuery, AppResult, ok, time};
use shared::ApiResponse;
use shared::models::{Branch, Slot};

/// 窗口上限，防止一次查询展开过大的日期范围
const MAX_WINDOW_DAYS: u32 = 90;

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub branch: Option<Branch>,
    pub days: Option<u32>,
}

/// GET /api/admin/slots - 从今天起的时段可用性
///
/// `branch` 缺省时返回全部分店，`days` 缺省时使用配置窗口。
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<SlotQuery>,
) -> AppResult<Json<ApiResponse<Vec<Slot>>>> {
    let num_days = query.days.unwrap_or(state.config.slot_window_days);
    if num_days == 0 || num_days > MAX_WINDOW_DAYS {
        return Err(AppError::validation(format!(
            "days must be between 1 and {MAX_WINDOW_DAYS}"
        )));
    }

    let start = time::today();
    let end = start
        .checked_add_days(Days::new(u64::from(num_days) - 1))
        .ok_or_else(|| AppError::validation("Date window out of range"))?;

    let repo = BookingRepository::new(state.get_db());
    let bookings = repo.find_in_window(start, end).await?;

    let mut branches = state.config.branch_capacities();
    if let Some(branch) = query.branch {
        branches.retain(|bc| bc.branch == branch);
    }

    let slots = compute_slots(
        &bookings,
        &branches,
        &state.config.time_labels,
        start,
        num_days,
        state.config.slot_low_water_mark,
    );
    Ok(ok(slots))
}
