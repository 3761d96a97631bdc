//! Booking API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_guests,
    validate_optional_text, validate_required_text, validate_time_label,
};
use crate::utils::{AppJson, AppResult, ok};
use shared::ApiResponse;
use shared::models::{Booking, BookingCreate};

/// POST /api/bookings - 提交新预订 (初始状态 pending)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BookingCreate>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_time_label(&payload.time, &state.config.time_labels)?;
    validate_guests(payload.guests)?;
    validate_optional_text(&payload.occasion, "occasion", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.message, "message", MAX_NOTE_LEN)?;

    let repo = BookingRepository::new(state.get_db());
    let booking = repo.create(payload).await?;

    tracing::info!(
        branch = %booking.branch,
        date = %booking.date,
        time = %booking.time,
        guests = booking.guests,
        "New booking received"
    );

    Ok(ok(booking))
}
