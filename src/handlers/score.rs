// src/handlers/score.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Local;
use serde_json::json;

use crate::{
    error::AppError,
    models::score_record::{SaveScoreRequest, ScoreRecord, percentage_of},
    storage::ScoreStore,
    utils::sanitize::{sanitize_id, truncate_title},
};

const MAX_TITLE_LEN: usize = 100;

/// Records one quiz attempt.
///
/// * Requires `quizId` (non-empty), `score` and `totalQuestions`; anything
///   missing or non-coercible fails with 400 before any state is touched.
/// * Sanitizes `quizId`/`topic` and truncates `quizTitle` silently.
/// * Stamps the record server-side (`timestamp`, `date`, `userId` fallback)
///   and appends it to the quiz's record set.
pub async fn save_score(
    State(store): State<Arc<ScoreStore>>,
    Json(payload): Json<SaveScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz_id = payload
        .quiz_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(missing_fields)?;
    let score = coerce_int(payload.score.as_ref()).ok_or_else(missing_fields)?;
    let total_questions =
        coerce_int(payload.total_questions.as_ref()).ok_or_else(missing_fields)?;

    let quiz_id = sanitize_id(quiz_id);
    let topic = payload
        .topic
        .as_deref()
        .map(sanitize_id)
        .unwrap_or_default();
    let quiz_title = payload
        .quiz_title
        .as_deref()
        .map(|title| truncate_title(title, MAX_TITLE_LEN))
        .unwrap_or_default();

    let now = Local::now();
    let timestamp = now.timestamp();
    let user_id = payload
        .anonymous_id
        .clone()
        .unwrap_or_else(|| format!("anon_{timestamp}"));

    let record = ScoreRecord {
        quiz_id: quiz_id.clone(),
        topic,
        quiz_title,
        score,
        total_questions,
        percentage: percentage_of(score, total_questions),
        user_id,
        timestamp,
        date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    store.append(&quiz_id, record).await?;

    Ok(Json(json!({ "success": true })))
}

/// CORS preflight for `/save-score`: 200 with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn missing_fields() -> AppError {
    AppError::Validation("Missing required fields".to_string())
}

/// Integer coercion for `score` / `totalQuestions`.
///
/// Clients have historically sent JSON integers, floats and numeric
/// strings; floats are truncated, strings parsed. Anything else counts as
/// a missing field.
fn coerce_int(value: Option<&serde_json::Value>) -> Option<i64> {
    match value? {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_coerce_int_number() {
        assert_eq!(coerce_int(Some(&json!(8))), Some(8));
        assert_eq!(coerce_int(Some(&json!(0))), Some(0));
    }

    #[test]
    fn test_coerce_int_float_truncates() {
        assert_eq!(coerce_int(Some(&json!(7.9))), Some(7));
    }

    #[test]
    fn test_coerce_int_numeric_string() {
        assert_eq!(coerce_int(Some(&json!("12"))), Some(12));
        assert_eq!(coerce_int(Some(&json!(" 3 "))), Some(3));
    }

    #[test]
    fn test_coerce_int_rejects_garbage() {
        assert_eq!(coerce_int(Some(&json!("abc"))), None);
        assert_eq!(coerce_int(Some(&json!(true))), None);
        assert_eq!(coerce_int(Some(&Value::Null)), None);
        assert_eq!(coerce_int(None), None);
    }
}
