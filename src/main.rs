//! `pulse-icon`: render the app icon and package it as `.icns`.
//!
//! ```bash
//! pulse-icon --output dist/App.icns --workdir target/icon
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, info};

use pulse_icon_renderer::{IconPackager, Iconutil};

#[derive(Parser, Debug)]
#[command(name = "pulse-icon")]
#[command(about = "Generate the application .icns icon")]
#[command(version)]
struct Args {
    /// Output .icns path
    #[arg(long)]
    output: PathBuf,

    /// Parent directory for the temporary app.iconset
    #[arg(long)]
    workdir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let packager = IconPackager::new(Iconutil::new());
    match packager.run(&args.output, &args.workdir) {
        Ok(manifest) => {
            info!(
                files = manifest.entries.len(),
                iconset = %manifest.directory.display(),
                "iconset manifest"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

/// Formats an error with its sources, outermost first.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
