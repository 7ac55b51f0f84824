//! Reporting utilities: leaderboard, model debuts, and formatted terminal output.

pub mod format;

pub use format::*;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Dataset, ModelScore};

/// How many top-ranked models per snapshot count as "on the board".
pub const DEBUT_TOP_N: usize = 5;

/// The latest snapshot's roster, best first.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub date: NaiveDate,
    pub entries: Vec<ModelScore>,
    /// Top-scoring roster entry; on ties the later roster entry wins.
    pub best: Option<ModelScore>,
    pub best_score: f64,
    /// Points left until the target, never negative.
    pub remaining: f64,
}

/// A model's first appearance among a snapshot's top entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Debut {
    pub date: NaiveDate,
    pub name: String,
    pub provider: String,
    pub score: f64,
}

/// Leaderboard for the latest snapshot, or `None` when there are no snapshots.
pub fn leaderboard(dataset: &Dataset, target: f64) -> Option<Leaderboard> {
    let latest = dataset.latest_snapshot()?;

    let best = latest
        .models
        .iter()
        .reduce(|prev, cur| if prev.score > cur.score { prev } else { cur })
        .cloned();
    let best_score = best.as_ref().map_or(latest.best_score, |m| m.score);

    Some(Leaderboard {
        date: latest.date,
        entries: ranked(&latest.models),
        best,
        best_score,
        remaining: (target - best_score).max(0.0),
    })
}

/// Each model's first appearance in the top `top_n` of any snapshot, oldest first.
pub fn debut_points(dataset: &Dataset, top_n: usize) -> Vec<Debut> {
    let mut snapshots: Vec<_> = dataset.scores.iter().collect();
    snapshots.sort_by_key(|s| s.date);

    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for snap in snapshots {
        for m in ranked(&snap.models).into_iter().take(top_n) {
            if seen.insert(m.name.clone()) {
                out.push(Debut {
                    date: snap.date,
                    name: m.name,
                    provider: m.provider,
                    score: m.score,
                });
            }
        }
    }
    out
}

/// Roster sorted by score, highest first; equal scores keep roster order.
fn ranked(models: &[ModelScore]) -> Vec<ModelScore> {
    let mut sorted = models.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}
