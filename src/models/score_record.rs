// src/models/score_record.rs

use serde::{Deserialize, Serialize};

/// One persisted quiz attempt. Immutable once created.
///
/// The full record set for a quiz is stored as a JSON array of these,
/// camelCase on disk and on the wire, so files written by earlier
/// deployments of the API remain readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub quiz_id: String,

    /// Sanitized topic label; empty when the client sent none.
    pub topic: String,

    /// Display title, truncated to 100 characters; empty when absent.
    pub quiz_title: String,

    pub score: i64,
    pub total_questions: i64,

    /// Derived `round(score / totalQuestions * 100)`, 0 when
    /// `totalQuestions` is 0. Caller-supplied inputs are not range-checked,
    /// so this is not clamped either.
    pub percentage: i64,

    /// Anonymous identifier; `anon_<unixSeconds>` when the client sent none.
    pub user_id: String,

    /// Unix seconds, server-assigned at write time.
    pub timestamp: i64,

    /// Human-readable local time, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
}

/// DTO for submitting a quiz attempt.
///
/// Every field is optional at the deserialization layer so that presence
/// checks (and the exact "Missing required fields" response) stay in the
/// handler instead of surfacing as a serde rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScoreRequest {
    pub quiz_id: Option<String>,

    /// Kept as raw JSON values: clients have historically sent numbers and
    /// numeric strings, both of which are coerced to integers.
    pub score: Option<serde_json::Value>,
    pub total_questions: Option<serde_json::Value>,

    pub topic: Option<String>,
    pub quiz_title: Option<String>,
    pub anonymous_id: Option<String>,
}

/// Compute the integer percentage for an attempt.
///
/// Rounding is half-away-from-zero (`f64::round`), which for the
/// non-negative scores seen in practice equals round-half-up.
pub fn percentage_of(score: i64, total_questions: i64) -> i64 {
    if total_questions > 0 {
        (score as f64 / total_questions as f64 * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert_eq!(percentage_of(8, 10), 80);
        assert_eq!(percentage_of(10, 10), 100);
        assert_eq!(percentage_of(0, 10), 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1/8 = 12.5% -> 13
        assert_eq!(percentage_of(1, 8), 13);
        // 1/3 = 33.33% -> 33
        assert_eq!(percentage_of(1, 3), 33);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage_of(5, 0), 0);
    }
}
