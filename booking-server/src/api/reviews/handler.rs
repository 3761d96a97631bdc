//! Review API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::ReviewRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_rating, validate_required_text,
};
use crate::utils::{AppJson, AppResult, ok};
use shared::ApiResponse;
use shared::models::{Review, ReviewCreate, ReviewList};

/// GET /api/reviews - 最近的评价及其平均评分
///
/// 平均分按返回的页计算，不是全表平均。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let repo = ReviewRepository::new(state.get_db());
    let reviews = repo.find_recent(state.config.review_page_size).await?;

    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        f64::from(total) / reviews.len() as f64
    };

    Ok(ok(ReviewList {
        reviews,
        average_rating,
    }))
}

/// POST /api/reviews - 提交新评价
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ReviewCreate>,
) -> AppResult<Json<ApiResponse<Review>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_rating(payload.rating)?;
    validate_required_text(&payload.comment, "comment", MAX_NOTE_LEN)?;

    let repo = ReviewRepository::new(state.get_db());
    let review = repo.create(payload).await?;
    Ok(ok(review))
}
