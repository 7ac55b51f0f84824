//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed best scores: `o`
//! - one model's projection: `-` line
//! - target score: `.` line
//!
//! The x axis is calendar time; the y axis is fixed to the projection clamp
//! range so charts of different models line up.

use chrono::NaiveDate;

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::io::projection::ProjectionFile;
use crate::projection::{CLAMP_MAX, CLAMP_MIN, Projection};

/// Render one model's projection from an in-memory run.
pub fn render_projection_plot(
    projection: &Projection,
    kind: ModelKind,
    target: f64,
    width: usize,
    height: usize,
) -> String {
    render_plot(
        kind.display_name(),
        &projection.dates,
        &projection.actual,
        &projection.model(kind).values,
        target,
        width,
        height,
    )
}

/// Render one model's projection from a saved projection JSON file.
pub fn render_projection_file_plot(
    file: &ProjectionFile,
    kind: ModelKind,
    width: usize,
    height: usize,
) -> Result<String, AppError> {
    let series = file
        .model(kind)
        .ok_or_else(|| AppError::io(format!("Projection JSON has no '{kind}' series.")))?;
    Ok(render_plot(
        kind.display_name(),
        &file.dates,
        &file.actual,
        &series.values,
        file.target_score,
        width,
        height,
    ))
}

fn render_plot(
    title: &str,
    dates: &[NaiveDate],
    actual: &[Option<f64>],
    values: &[Option<f64>],
    target: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (Some(&start), Some(&end)) = (dates.first(), dates.last()) else {
        return format!("Plot: {title} | no data\n");
    };
    let span = ((end - start).num_days() as f64).max(1.0);
    let day = |d: NaiveDate| (d - start).num_days() as f64;

    let mut grid = vec![vec![' '; width]; height];

    // Curve first, then the target line into the gaps, then points on top.
    let mut prev = None;
    for (&d, v) in dates.iter().zip(values) {
        let Some(y) = *v else {
            prev = None;
            continue;
        };
        let x = map_x(day(d), span, width);
        let row = map_y(y, height);
        match prev {
            Some((x0, y0)) => draw_line(&mut grid, x0, y0, x, row, '-'),
            None => grid[row][x] = '-',
        }
        prev = Some((x, row));
    }

    if (CLAMP_MIN..=CLAMP_MAX).contains(&target) {
        let row = map_y(target, height);
        for cell in grid[row].iter_mut().filter(|c| **c == ' ') {
            *cell = '.';
        }
    }

    for (&d, v) in dates.iter().zip(actual) {
        if let Some(y) = *v {
            grid[map_y(y, height)][map_x(day(d), span, width)] = 'o';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {title} | {start} .. {end} | y=[{CLAMP_MIN:.0}, {CLAMP_MAX:.0}]% | target {target:.0}%\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn map_x(day: f64, span: f64, width: usize) -> usize {
    let u = (day / span).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, height: usize) -> usize {
    let u = ((y - CLAMP_MIN) / (CLAMP_MAX - CLAMP_MIN)).clamp(0.0, 1.0);
    // Max score is the top row.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if let Some(cell) = grid
            .get_mut(y0 as usize)
            .and_then(|row| row.get_mut(x0 as usize))
            .filter(|c| **c == ' ')
        {
            *cell = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
