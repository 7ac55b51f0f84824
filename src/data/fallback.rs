//! Embedded default dataset.
//!
//! Used when the dataset file is missing or unreadable so the projection
//! engine always receives a well-formed dataset.

use chrono::NaiveDate;

use crate::domain::{Dataset, Milestone, ModelScore, ProjectionSettings, Snapshot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal calendar dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn entry(name: &str, score: f64, provider: &str) -> ModelScore {
    ModelScore {
        name: name.to_string(),
        score,
        provider: provider.to_string(),
    }
}

/// The built-in dataset: two milestones and one leaderboard snapshot.
pub fn fallback_dataset() -> Dataset {
    Dataset {
        last_updated: Some(date(2024, 12, 21)),
        historical_best_scores: vec![
            Milestone {
                date: date(2022, 11, 30),
                score: 0.0,
                model: Some("ChatGPT (GPT-3.5)".to_string()),
            },
            Milestone {
                date: date(2024, 12, 1),
                score: 18.6,
                model: Some("Gemini 2.0 Flash Thinking Exp".to_string()),
            },
        ],
        scores: vec![Snapshot {
            date: date(2024, 12, 21),
            best_score: 18.6,
            models: vec![
                entry("Gemini 2.0 Flash Thinking Exp", 18.6, "Google"),
                entry("o1", 9.1, "OpenAI"),
                entry("Gemini 2.0 Flash", 6.2, "Google"),
                entry("Claude 3.5 Sonnet", 4.3, "Anthropic"),
                entry("GPT-4o", 3.3, "OpenAI"),
            ],
        }],
        projection: ProjectionSettings {
            method: Some("exponential".to_string()),
            doubling_time_days: 365.0,
            start_date: Some(date(2024, 12, 1)),
            start_score: Some(18.6),
            target_score: 100.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_well_formed() {
        let data = fallback_dataset();
        assert_eq!(data.historical_best_scores.len(), 2);
        assert_eq!(data.scores.len(), 1);
        let latest = data.latest_snapshot().unwrap();
        assert_eq!(latest.date, date(2024, 12, 21));
        assert_eq!(latest.best_score, 18.6);
        assert_eq!(data.projection.target_score, 100.0);
    }
}
