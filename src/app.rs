//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - layers defaults, scoring profile, and flags into a config
//! - runs the scoring pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::warn;

use crate::cli::{Command, PlotArgs, ScoreArgs};
use crate::config::{ScoringInputs, ScoringProfile, resolve_profile_path};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `esgc` binary.
pub fn run() -> Result<(), AppError> {
    // We want `esgc` and `esgc -e 40` to behave like `esgc tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Score(args) => handle_score(args, OutputMode::Full),
        Command::Grid(args) => handle_score(args, OutputMode::GridOnly),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    GridOnly,
}

fn handle_score(args: ScoreArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = inputs_from_args(&args)?.to_config()?;
    let out = pipeline::run_scoring(&config);

    if let Some(advisory) = &out.advisory {
        warn!(sum = advisory.sum, "{advisory}");
    }

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_score_report(&out));
            println!("{}", crate::report::format_rating_legend());
            if !args.no_plot {
                println!();
                print!(
                    "{}",
                    crate::plot::render_ascii_heatmap(&out.grid, args.width, args.height)
                );
            }
        }
        OutputMode::GridOnly => {
            print!("{}", crate::report::format_grid_table(&out.grid));
        }
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::export::write_grid_csv(path, &out.grid)?;
    }
    if let Some(path) = &args.export_grid {
        crate::io::grid::write_grid_json(path, &out)?;
    }

    Ok(())
}

fn handle_tui(args: ScoreArgs) -> Result<(), AppError> {
    let inputs = inputs_from_args(&args)?;
    inputs.validate()?;
    crate::tui::run(inputs)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::grid::read_grid_json(&args.grid)?;
    let plot = crate::plot::render_ascii_heatmap_from_file(&file, args.width, args.height);
    print!("{plot}");
    Ok(())
}

/// Layer defaults, the scoring profile (if any), and explicit flags.
pub fn inputs_from_args(args: &ScoreArgs) -> Result<ScoringInputs, AppError> {
    let profile = match resolve_profile_path(args.config.as_deref()) {
        Some(path) => Some(ScoringProfile::from_file(&path)?),
        None => None,
    };
    Ok(args.layered_inputs(profile.as_ref()))
}

/// Rewrite argv so `esgc` defaults to `esgc tui`.
///
/// Rules:
/// - `esgc`                      -> `esgc tui`
/// - `esgc -e 40 ...`            -> `esgc tui -e 40 ...`
/// - `esgc --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "grid" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(argv(&["esgc"])), argv(&["esgc", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["esgc", "-e", "40"])),
            argv(&["esgc", "tui", "-e", "40"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        assert_eq!(rewrite_args(argv(&["esgc", "score", "-f", "1"])), argv(&["esgc", "score", "-f", "1"]));
        assert_eq!(rewrite_args(argv(&["esgc", "--help"])), argv(&["esgc", "--help"]));
        assert_eq!(rewrite_args(argv(&["esgc", "bogus"])), argv(&["esgc", "bogus"]));
    }

    #[test]
    fn explicit_profile_is_loaded() {
        let path = std::env::temp_dir().join(format!("esgc_profile_{}.toml", std::process::id()));
        std::fs::write(&path, "[scores]\ng = 5.0\n").unwrap();
        let args = ScoreArgs {
            config: Some(path.clone()),
            ..ScoreArgs::default()
        };
        let inputs = inputs_from_args(&args).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(inputs.g, 5.0);
    }

    #[test]
    fn missing_profile_is_usage_error() {
        let args = ScoreArgs {
            config: Some(std::env::temp_dir().join("esgc_no_such_profile.toml")),
            ..ScoreArgs::default()
        };
        assert_eq!(inputs_from_args(&args).unwrap_err().exit_code(), 2);
    }
}
