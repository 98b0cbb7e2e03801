// src/models/stats.rs

use serde::Serialize;

use crate::models::score_record::ScoreRecord;

/// Histogram of attempts over five fixed percentage ranges.
/// Upper bounds are inclusive at each tier; 0 falls in the lowest bucket.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct Distribution {
    #[serde(rename = "0-20")]
    pub low: i64,
    #[serde(rename = "21-40")]
    pub below_average: i64,
    #[serde(rename = "41-60")]
    pub average: i64,
    #[serde(rename = "61-80")]
    pub above_average: i64,
    #[serde(rename = "81-100")]
    pub high: i64,
}

impl Distribution {
    fn add(&mut self, percentage: i64) {
        if percentage <= 20 {
            self.low += 1;
        } else if percentage <= 40 {
            self.below_average += 1;
        } else if percentage <= 60 {
            self.average += 1;
        } else if percentage <= 80 {
            self.above_average += 1;
        } else {
            self.high += 1;
        }
    }
}

/// One entry of the recent-attempts history, reduced to what the result
/// screen displays.
#[derive(Debug, Serialize, PartialEq)]
pub struct RecentScore {
    pub percentage: i64,
    pub date: String,
}

/// Aggregated statistics for one quiz id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub quiz_id: String,
    pub total_attempts: i64,
    pub average_score: i64,
    pub high_score: i64,
    pub distribution: Distribution,
    pub recent_scores: Vec<RecentScore>,
}

impl QuizStats {
    /// All-zero stats for a quiz with no recorded attempts.
    /// This is a successful empty result, not an error.
    pub fn empty(quiz_id: String) -> Self {
        Self {
            quiz_id,
            total_attempts: 0,
            average_score: 0,
            high_score: 0,
            distribution: Distribution::default(),
            recent_scores: Vec::new(),
        }
    }

    /// Compute statistics over a full record set, in storage order.
    pub fn compute(quiz_id: String, records: &[ScoreRecord]) -> Self {
        if records.is_empty() {
            return Self::empty(quiz_id);
        }

        let mut total_percentage: i64 = 0;
        let mut high_score: i64 = 0;
        let mut distribution = Distribution::default();

        for record in records {
            total_percentage += record.percentage;
            high_score = high_score.max(record.percentage);
            distribution.add(record.percentage);
        }

        let average_score =
            (total_percentage as f64 / records.len() as f64).round() as i64;

        // Last 10 attempts, oldest first (storage order is chronological)
        let recent_scores = records
            .iter()
            .rev()
            .take(10)
            .rev()
            .map(|record| RecentScore {
                percentage: record.percentage,
                date: record.date.clone(),
            })
            .collect();

        Self {
            quiz_id,
            total_attempts: records.len() as i64,
            average_score,
            high_score,
            distribution,
            recent_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(percentage: i64) -> ScoreRecord {
        ScoreRecord {
            quiz_id: "rust-basics".to_string(),
            topic: String::new(),
            quiz_title: String::new(),
            score: 0,
            total_questions: 0,
            percentage,
            user_id: "anon_0".to_string(),
            timestamp: 0,
            date: "2026-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_stats_are_all_zero() {
        let stats = QuizStats::compute("q".to_string(), &[]);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.average_score, 0);
        assert_eq!(stats.high_score, 0);
        assert_eq!(stats.distribution, Distribution::default());
        assert!(stats.recent_scores.is_empty());
    }

    #[test]
    fn test_single_record() {
        let stats = QuizStats::compute("q".to_string(), &[record(80)]);
        assert_eq!(stats.total_attempts, 1);
        assert_eq!(stats.average_score, 80);
        assert_eq!(stats.high_score, 80);
        // 80 <= 80, so it lands in the 61-80 bucket
        assert_eq!(stats.distribution.above_average, 1);
        assert_eq!(stats.recent_scores.len(), 1);
    }

    #[test]
    fn test_average_rounds() {
        // (50 + 75) / 2 = 62.5 -> 63
        let stats = QuizStats::compute("q".to_string(), &[record(50), record(75)]);
        assert_eq!(stats.average_score, 63);
    }

    #[test]
    fn test_bucket_boundaries() {
        let stats = QuizStats::compute(
            "q".to_string(),
            &[record(0), record(20), record(21), record(60), record(61), record(100)],
        );
        assert_eq!(stats.distribution.low, 2); // 0, 20
        assert_eq!(stats.distribution.below_average, 1); // 21
        assert_eq!(stats.distribution.average, 1); // 60
        assert_eq!(stats.distribution.above_average, 1); // 61
        assert_eq!(stats.distribution.high, 1); // 100
    }

    #[test]
    fn test_recent_scores_keep_chronological_order() {
        let records: Vec<ScoreRecord> = (0..15).map(|i| record(i * 5)).collect();
        let stats = QuizStats::compute("q".to_string(), &records);
        assert_eq!(stats.recent_scores.len(), 10);
        // Last 10 of 0,5,..,70 are 25..70, oldest first
        assert_eq!(stats.recent_scores.first().unwrap().percentage, 25);
        assert_eq!(stats.recent_scores.last().unwrap().percentage, 70);
    }

    #[test]
    fn test_distribution_serializes_with_range_keys() {
        let stats = QuizStats::compute("q".to_string(), &[record(80)]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["distribution"]["61-80"], 1);
        assert_eq!(json["distribution"]["81-100"], 0);
    }
}
