//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the projection pipeline
//! - prints reports/plots
//! - writes optional exports

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, CountdownArgs, PlotArgs, ProjectArgs};
use crate::domain::ProjectionConfig;
use crate::error::AppError;
use crate::projection::Countdown;

pub mod pipeline;

/// Environment variable naming the default dataset file.
pub const DATA_ENV: &str = "HORIZON_DATA";

/// Entry point for the `horizon` binary.
pub fn run() -> Result<(), AppError> {
    // We want `horizon` and `horizon --data x.json` to behave like `horizon project ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Project(args) => handle_project(&args),
        Command::Countdown(args) => handle_countdown(&args),
        Command::Models => {
            print!("{}", crate::report::format_model_list());
            Ok(())
        }
        Command::Plot(args) => handle_plot(&args),
    }
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_project(args: &ProjectArgs) -> Result<(), AppError> {
    let config = projection_config_from_args(args);
    let run = pipeline::run_projection(&config)?;

    println!(
        "{}",
        crate::report::format_summary(&run.loaded.source, &run.projection, &run.primary, run.target())
    );
    println!("{}", crate::report::format_crossings(&run.projection, run.context.selected()));
    if let Some(board) = &run.leaderboard {
        println!("{}", crate::report::format_leaderboard(board));
    }
    println!("{}", crate::report::format_debuts(&run.debuts));

    if config.plot {
        let plot = crate::plot::render_projection_plot(
            &run.projection,
            run.context.selected(),
            run.target(),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_projection_csv(path, &run.projection)?;
        info!(path = %path.display(), "projection CSV written");
    }
    if let Some(path) = &config.export_json {
        crate::io::projection::write_projection_json(path, &run.projection, run.target())?;
        info!(path = %path.display(), "projection JSON written");
    }

    Ok(())
}

fn handle_countdown(args: &CountdownArgs) -> Result<(), AppError> {
    let config = ProjectionConfig {
        data_path: resolve_data_path(args.data.as_deref()),
        selected: args.model,
        doubling_time_days: None,
        target_score: None,
        horizon_days: crate::projection::DEFAULT_HORIZON_DAYS,
        plot: false,
        plot_width: 0,
        plot_height: 0,
        export_csv: None,
        export_json: None,
    };
    let run = pipeline::run_projection(&config)?;

    let countdown = Countdown::between(Local::now().naive_local(), run.primary.target_date);
    print!("{}", crate::report::format_countdown(&run.primary, &countdown));
    Ok(())
}

fn handle_plot(args: &PlotArgs) -> Result<(), AppError> {
    let file = crate::io::projection::read_projection_json(&args.projection)?;
    let plot = crate::plot::render_projection_file_plot(&file, args.model, args.width, args.height)?;

    println!("{plot}");
    Ok(())
}

pub fn projection_config_from_args(args: &ProjectArgs) -> ProjectionConfig {
    ProjectionConfig {
        data_path: resolve_data_path(args.data.as_deref()),
        selected: args.model,
        doubling_time_days: args.doubling_days,
        target_score: args.target,
        horizon_days: args.horizon_days,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

/// `--data` wins; otherwise `HORIZON_DATA` from the environment or `.env`.
pub fn resolve_data_path(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    dotenvy::dotenv().ok();
    std::env::var_os(DATA_ENV).map(PathBuf::from)
}

/// Rewrite argv so `horizon` defaults to `horizon project`.
///
/// Rules:
/// - `horizon`                          -> `horizon project`
/// - `horizon --data x.json ...`        -> `horizon project --data x.json ...`
/// - `horizon --help/--version/-h`      -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("project".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "project" | "countdown" | "models" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "project flags".
    if arg1.starts_with('-') {
        argv.insert(1, "project".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
