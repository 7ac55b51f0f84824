//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting/projection code stays clean and testable
//! - output changes are localized

use crate::domain::ModelKind;
use crate::io::ingest::DatasetSource;
use crate::projection::{Countdown, PrimaryProjection, Projection};
use crate::report::{Debut, Leaderboard};

/// Header block: data source, anchor, and the primary model's target date.
pub fn format_summary(
    source: &DatasetSource,
    projection: &Projection,
    primary: &PrimaryProjection,
    target: f64,
) -> String {
    let mut out = String::new();

    out.push_str("=== horizon - benchmark saturation projection ===\n");
    match source {
        DatasetSource::File(path) => out.push_str(&format!("Data: {}\n", path.display())),
        DatasetSource::Fallback { reason } => out.push_str(&format!("Data: embedded fallback ({reason})\n")),
    }
    out.push_str(&format!(
        "Series: {} points from {} | anchor {} @ {:.1}%\n",
        projection.history_len(),
        projection.reference_date,
        projection.anchor.date,
        projection.anchor.score,
    ));
    out.push_str(&format!("Target: {target:.1}%\n"));

    out.push_str("\nPrimary projection:\n");
    out.push_str(&format!("- model: {} ({})\n", primary.kind.display_name(), primary.kind));
    out.push_str(&format!(
        "- target date: {} ({} days after anchor)\n",
        primary.target_date, primary.days_to_target
    ));
    if primary.fallback {
        out.push_str("- model never reaches the target; showing the 5-year default\n");
    }
    out.push('\n');

    out
}

/// Per-model diagnostics and crossing dates. The selected model is starred.
pub fn format_crossings(projection: &Projection, selected: ModelKind) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<20} {:>10} {:>10} {:>10} {:>7} {:<12}\n",
        "model", "offset", "SSE", "RMSE", "days", "crosses"
    ));
    out.push_str(&format!(
        "  {:-<20} {:-<10} {:-<10} {:-<10} {:-<7} {:-<12}\n",
        "", "", "", "", "", ""
    ));

    for m in &projection.models {
        let mark = if m.kind == selected { '*' } else { ' ' };
        let (days, date) = match (m.crossing.days, m.crossing.date) {
            (Some(days), Some(date)) => (days.to_string(), date.to_string()),
            _ => ("-".to_string(), "unreachable".to_string()),
        };
        let line = format!(
            "{mark} {:<20} {:>10.3} {:>10.3} {:>10.3} {:>7} {:<12}",
            m.kind.display_name(),
            m.offset,
            m.quality.sse,
            m.quality.rmse,
            days,
            date,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Latest snapshot roster, best first.
pub fn format_leaderboard(board: &Leaderboard) -> String {
    let mut out = String::new();
    out.push_str(&format!("Leaderboard ({}):\n", board.date));
    for (i, m) in board.entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<32} {:<12} {:>6.1}%\n",
            i + 1,
            truncate(&m.name, 32),
            truncate(&m.provider, 12),
            m.score
        ));
    }
    let best = board.best.as_ref().map_or("-", |m| m.name.as_str());
    out.push_str(&format!(
        "Best: {best} @ {:.1}% | remaining: {:.1}%\n",
        board.best_score, board.remaining
    ));
    out
}

/// First top-N appearance of each model, oldest first.
pub fn format_debuts(debuts: &[Debut]) -> String {
    let mut out = String::new();
    out.push_str("Model debuts:\n");
    for d in debuts {
        out.push_str(&format!(
            "  {} {:<32} {:>6.1}%\n",
            d.date,
            truncate(&d.name, 32),
            d.score
        ));
    }
    out
}

pub fn format_countdown(primary: &PrimaryProjection, countdown: &Countdown) -> String {
    if countdown.is_elapsed() {
        return format!(
            "{} projected the target on {}: date has passed\n",
            primary.kind.display_name(),
            primary.target_date
        );
    }
    format!(
        "{} projects the target on {}: {countdown}\n",
        primary.kind.display_name(),
        primary.target_date
    )
}

/// The nine selectable model names.
pub fn format_model_list() -> String {
    let mut out = String::new();
    for kind in ModelKind::ALL {
        out.push_str(&format!("{:<12} {}\n", kind.name(), kind.display_name()));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_dataset;
    use crate::projection::{ProjectionContext, ProjectionOptions, generate_projection};
    use crate::report::{debut_points, leaderboard};
    use chrono::NaiveDate;

    #[test]
    fn crossings_table_lists_every_model() {
        let p = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let txt = format_crossings(&p, ModelKind::MooresLaw);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 2 + 9);
        let starred: Vec<_> = lines.iter().filter(|l| l.starts_with('*')).collect();
        assert_eq!(starred.len(), 1);
        assert!(starred[0].contains("Moore's Law"));
    }

    #[test]
    fn summary_mentions_fallback_source() {
        let p = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let primary = ProjectionContext::default().primary(&p);
        let source = DatasetSource::Fallback {
            reason: "no dataset path given".to_string(),
        };
        let txt = format_summary(&source, &p, &primary, 100.0);
        assert!(txt.contains("embedded fallback (no dataset path given)"));
        assert!(txt.contains("anchor 2024-12-21 @ 18.6%"));
        assert!(txt.contains(&primary.target_date.to_string()));
    }

    #[test]
    fn leaderboard_and_debuts_render() {
        let data = fallback_dataset();
        let board = format_leaderboard(&leaderboard(&data, 100.0).unwrap());
        assert!(board.starts_with("Leaderboard (2024-12-21):\n  1. Gemini 2.0 Flash Thinking Exp"));
        assert!(board.ends_with("remaining: 81.4%\n"));

        let debuts = format_debuts(&debut_points(&data, 5));
        assert_eq!(debuts.lines().count(), 6);
    }

    #[test]
    fn countdown_line() {
        let p = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let primary = ProjectionContext::default().primary(&p);
        let now = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let line = format_countdown(&primary, &Countdown::between(now, primary.target_date));
        assert!(line.starts_with("Moore's Law projects the target on"));
    }

    #[test]
    fn model_list_has_nine_names() {
        let txt = format_model_list();
        assert_eq!(txt.lines().count(), 9);
        assert!(txt.lines().any(|l| l.starts_with("localLinear")));
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdef", 4), "abc.");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
