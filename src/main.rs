//! publish-brief: push the generated daily brief to GitHub Pages
//!
//! Run from anywhere inside the site repository, after the brief has been
//! generated into `docs/index.html`.

use anyhow::{Context, Result};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brief_publisher::{Publisher, Report};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    init_logging();

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let publisher = match Publisher::discover(&cwd) {
        Ok(publisher) => publisher,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    let report = Report::from_result(&publisher.publish(), publisher.settings());
    report.print();
    Ok(ExitCode::from(report.exit_code))
}
