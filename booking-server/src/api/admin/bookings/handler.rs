//! Admin Booking API Handlers
//!
//! 审核动作的统一流程：
//! 1. 读取预订，不存在返回 404
//! 2. 生命周期检查 (lifecycle::apply)，状态不符返回 409
//! 3. 条件更新写库 (CAS)，并发冲突同样返回 409
//! 4. 派发通知邮件；失败不影响已完成的状态转换，
//!    仅在响应中标记 `emailSent: false`

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::booking::{BookingAction, LifecyclePolicy, lifecycle};
use crate::core::ServerState;
use crate::db::models::TransitionPatch;
use crate::db::repository::BookingRepository;
use crate::utils::{AppError, AppJson, AppQuery, AppResult, ok, ok_with_email};
use shared::ApiResponse;
use shared::models::{Booking, BookingActionPayload, BookingStatus, Branch};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<BookingStatus>,
    pub branch: Option<Branch>,
}

/// GET /api/admin/bookings - 预订列表，可按状态/分店过滤
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = repo.find_all(query.status, query.branch).await?;
    Ok(ok(bookings))
}

/// POST /api/admin/bookings/:id/approve - 批准预订并通知顾客
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<BookingActionPayload>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let (booking, email_sent) =
        run_action(&state, &id, BookingAction::Approve { note: payload.note }).await?;
    Ok(ok_with_email(booking, email_sent))
}

/// POST /api/admin/bookings/:id/reject - 拒绝预订并通知顾客
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<BookingActionPayload>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let (booking, email_sent) =
        run_action(&state, &id, BookingAction::Reject { note: payload.note }).await?;
    Ok(ok_with_email(booking, email_sent))
}

/// POST /api/admin/bookings/:id/close - 关闭 (取消) 预订
///
/// 默认不通知顾客；开启 `NOTIFY_ON_CLOSE` 后响应带 `emailSent`。
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let (booking, email_sent) = run_action(&state, &id, BookingAction::Close).await?;
    if state.config.notify_on_close {
        Ok(ok_with_email(booking, email_sent))
    } else {
        Ok(ok(booking))
    }
}

/// DELETE /api/admin/bookings/:id - 永久删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = BookingRepository::new(state.get_db());
    let deleted = repo.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found("Booking"));
    }
    tracing::info!(booking_id = %id, "Booking deleted");
    Ok(Json(ApiResponse::success()))
}

/// 执行一次状态转换动作，返回更新后的记录和邮件派发结果
async fn run_action(
    state: &ServerState,
    id: &str,
    action: BookingAction,
) -> Result<(Booking, bool), AppError> {
    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking"))?;

    let policy = LifecyclePolicy {
        notify_on_close: state.config.notify_on_close,
        frontend_url: state.config.frontend_url.clone(),
    };
    let transition = lifecycle::apply(&booking, &action, &policy, chrono::Utc::now())
        .map_err(|e| AppError::invalid_state(e.to_string()))?;

    let Some(updated) = transition.updated else {
        return Err(AppError::internal("Transition produced no record"));
    };

    // 写库以当前状态为前置条件；返回空说明另一管理端抢先改了状态
    let expected: &[BookingStatus] = action.expected_statuses().unwrap_or(&[]);
    let patch = TransitionPatch::from_updated(&updated);
    let stored = repo
        .update_transition(id, expected, patch)
        .await?
        .ok_or_else(|| {
            AppError::invalid_state("Booking was modified concurrently, reload and retry")
        })?;

    let email_sent = match (&state.mailer, &transition.notification) {
        (Some(mailer), Some(notification)) => match mailer.send(notification).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    booking_id = %id,
                    to = %notification.to,
                    error = %e,
                    "Failed to send notification email"
                );
                false
            }
        },
        _ => false,
    };

    Ok((stored, email_sent))
}
