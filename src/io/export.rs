//! Export a projection to CSV.
//!
//! One row per date on the shared axis; one column per model in canonical
//! order. Missing values are left as empty cells so spreadsheets keep them
//! distinct from a score of 0.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::projection::Projection;

/// Write the projection's parallel arrays to a CSV file.
pub fn write_projection_csv(path: &Path, projection: &Projection) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_projection_rows(&mut out, projection)?;
    out.flush()
        .map_err(|e| AppError::io(format!("Failed to write export CSV: {e}")))?;

    Ok(())
}

/// Write the CSV body to any writer.
pub fn write_projection_rows(out: &mut impl Write, projection: &Projection) -> Result<(), AppError> {
    let header: Vec<&str> = ["date", "label", "actual"]
        .into_iter()
        .chain(ModelKind::ALL.iter().map(|k| k.name()))
        .collect();
    writeln!(out, "{}", header.join(","))
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for (i, date) in projection.dates.iter().enumerate() {
        let mut row = vec![
            date.to_string(),
            format!("\"{}\"", projection.labels[i]),
            cell(projection.actual[i]),
        ];
        row.extend(projection.models.iter().map(|m| cell(m.values[i])));

        writeln!(out, "{}", row.join(","))
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_dataset;
    use crate::projection::{ProjectionOptions, generate_projection};

    #[test]
    fn rows_follow_the_date_axis() {
        let projection = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let mut buf = Vec::new();
        write_projection_rows(&mut buf, &projection).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), projection.dates.len() + 1);
        assert_eq!(
            lines[0],
            "date,label,actual,linear,exponential,mooresLaw,logarithmic,polynomial,logistic,powerLaw,ridge,localLinear"
        );
        // First milestone: observed 0, no model values.
        assert_eq!(lines[1], "2022-11-30,\"Nov 30, 2022\",0.0000,,,,,,,,,");
        // Anchor row: every model pinned to the current best.
        let anchor = lines[projection.anchor.index + 1];
        assert!(anchor.starts_with("2024-12-21,\"Dec 21, 2024\",18.6000,18.6000,"));
        assert_eq!(anchor.matches("18.6000").count(), 10);
    }

    #[test]
    fn missing_values_are_empty_cells() {
        assert_eq!(cell(None), "");
        assert_eq!(cell(Some(0.0)), "0.0000");
    }
}
