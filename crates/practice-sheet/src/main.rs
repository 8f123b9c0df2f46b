//! Practice sheet runner - checks bishop and rook moves on a prepared board.

use chess_core::Move;
use clap::Parser;
use practice_sheet::{run_sheet, CheckConfig, SheetConfig};
use std::path::PathBuf;
use tracing::Level;

/// Checks moves on a prepared board against expected verdicts.
#[derive(Parser)]
#[command(name = "practice-sheet")]
#[command(about = "Validates bishop and rook moves on a prepared board")]
struct Args {
    /// TOML sheet to run (defaults to the built-in practice position)
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Extra move to report on, e.g. "c3e1" (repeatable)
    #[arg(long = "check", value_name = "MOVE")]
    checks: Vec<Move>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the board
    #[arg(long)]
    no_board: bool,

    /// Log each move resolution
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let sheet = match &args.sheet {
        Some(path) => {
            let sheet = SheetConfig::load(path)?;
            tracing::info!("Loaded sheet from {}", path.display());
            sheet
        }
        None => {
            tracing::info!("No sheet given, using the built-in practice position");
            SheetConfig::builtin()?
        }
    };

    let extra: Vec<CheckConfig> = args
        .checks
        .iter()
        .map(|m| CheckConfig {
            from: m.from.to_string(),
            to: m.to.to_string(),
            expect: None,
            description: Some(format!("Move {}", m)),
        })
        .collect();

    let report = run_sheet(&sheet, &extra)?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout, !args.no_board)?;
    }
    drop(stdout);

    if report.failed() > 0 {
        tracing::error!("{} of {} checks failed", report.failed(), report.results.len());
        std::process::exit(1);
    }
    Ok(())
}
