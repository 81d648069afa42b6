use clap::Parser;
use colored::Colorize;
use exportarr_maint::config::{DEFAULT_FIXTURE_INPUT, DEFAULT_FIXTURE_OUTPUT};
use exportarr_maint::error;
use exportarr_maint::projector;
use std::path::PathBuf;
use std::process::ExitCode;

/// Trim a Sonarr `/api/v3/series` dump down to the collector test fixture
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Full series dump to read
    #[arg(long, short = 'i', default_value = DEFAULT_FIXTURE_INPUT)]
    input: PathBuf,

    /// Fixture file to write
    #[arg(long, short = 'o', default_value = DEFAULT_FIXTURE_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!(
        "projecting {} -> {}",
        args.input.display(),
        args.output.display()
    );

    match projector::project(&args.input, &args.output) {
        Ok(summary) => {
            println!(
                "Wrote {} ({}): {} series, {} seasons.",
                args.output.display().to_string().green(),
                human_bytes::human_bytes(summary.bytes_written as f64),
                summary.series,
                summary.seasons
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error::report(&e);
            ExitCode::FAILURE
        }
    }
}
