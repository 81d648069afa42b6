use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use exportarr_maint::config::ImageRefConfig;
use exportarr_maint::{error, tags};
use std::path::Path;
use std::process::ExitCode;

/// Point the pinned exportarr image references at a new release tag
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Release tag, e.g. v1.2.3
    tag: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // --help / --version
            e.print().ok();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", "No tag passed to script! Exiting.".red());
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };

    let config = ImageRefConfig::default();
    match tags::update_tags(Path::new("."), &config, &args.tag) {
        Ok(updates) => {
            tags::print_updates(&updates);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error::report(&e);
            ExitCode::FAILURE
        }
    }
}
