// src/handlers/stats.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError, models::stats::QuizStats, storage::ScoreStore, utils::sanitize::sanitize_id,
};

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    #[serde(rename = "quizId")]
    pub quiz_id: Option<String>,
}

/// Aggregated statistics for one quiz.
///
/// Unknown quiz ids (and unreadable record sets) yield an all-zero stats
/// object rather than an error. Read-only, no locking; concurrent saves
/// are seen either fully or not at all.
pub async fn quiz_stats(
    State(store): State<Arc<ScoreStore>>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, AppError> {
    let quiz_id = params
        .quiz_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Missing quizId parameter".to_string()))?;

    let quiz_id = sanitize_id(&quiz_id);
    let records = store.load(&quiz_id).await;

    Ok(Json(QuizStats::compute(quiz_id, &records)))
}
