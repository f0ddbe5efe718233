use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use materia_core::config::{CliOverrides, MateriaConfig};
use materia_core::constants;
use materia_core::errors::MateriaErrorCode;
use materia_core::events::{EventDispatcher, TracingEventHandler};
use materia_epd::pipeline::{run, RunPaths};

#[derive(Parser)]
#[command(name = "materia", version, about = "Generate generic EPDs from matching source EPDs")]
struct Cli {
    /// Generic dataset folder (with `processes/` and `flows/`)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,
    /// Source EPD folder (with `processes/` and `flows/`)
    #[arg(value_name = "EPD_FOLDER_PATH")]
    epd_folder_path: PathBuf,
    /// Output folder (default: ./materia_output)
    #[arg(short = 'o', long = "output-path", alias = "output_path", value_name = "PATH")]
    output_path: Option<PathBuf>,
    /// Debug-level console output
    #[arg(short, long)]
    verbose: bool,
    /// Explicit config file; its folder becomes the lookup root
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Match-criteria directory
    #[arg(long, value_name = "DIR")]
    matches_dir: Option<PathBuf>,
    /// Market-share JSON table
    #[arg(long, value_name = "FILE")]
    market_shares: Option<PathBuf>,
    /// Location-escalation attempts per market
    #[arg(long, value_name = "N")]
    max_location_attempts: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    for path in [&cli.input_path, &cli.epd_folder_path] {
        if !path.exists() {
            eprintln!("error: path does not exist: {}", path.display());
            return ExitCode::from(2);
        }
    }

    let overrides = CliOverrides {
        matches_dir: cli.matches_dir.clone(),
        market_shares_file: cli.market_shares.clone(),
        max_location_attempts: cli.max_location_attempts,
    };
    let (config, config_root) = match &cli.config {
        Some(file) => {
            let root = file
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (MateriaConfig::load_file(file, Some(&overrides)), root)
        }
        None => {
            let root = PathBuf::from(".");
            (MateriaConfig::load(&root, Some(&overrides)), root)
        }
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            return ExitCode::from(2);
        }
    };

    let output = cli
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_OUTPUT_DIR));
    let log_file = output.join(config.output.effective_log_file_name());
    if let Err(e) = materia_core::tracing::init_tracing(cli.verbose, Some(&log_file)) {
        eprintln!("warning: cannot open log file {}: {e}", log_file.display());
        let _ = materia_core::tracing::init_tracing(cli.verbose, None);
    }

    let diagnostics = EventDispatcher::with_handler(Arc::new(TracingEventHandler));
    let paths = RunPaths {
        input: cli.input_path,
        epd_folder: cli.epd_folder_path,
        output,
        config_root,
    };

    match run(&config, &paths, &diagnostics) {
        Ok(result) => {
            tracing::info!(
                completed = result.data.completed.len(),
                failed = result.data.failed.len(),
                skipped = result.data.skipped.len(),
                errors = result.error_count(),
                "materia {} finished",
                constants::VERSION
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error_code = e.error_code(), "{e}");
            eprintln!("error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
