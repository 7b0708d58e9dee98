mod render;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use localefix_core::adapters::{FsFileStore, GlobCandidateSource};
use localefix_core::pipeline::run_repair;
use localefix_core::settings::{DEFAULT_ROOT, RepairSettings};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "localefix",
    version,
    about = "Best-effort repair pass for malformed locale JSON files."
)]
struct Cli {
    /// Root directory containing one subdirectory per locale.
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: Utf8PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = RepairSettings { root: cli.root };

    let outcome = run_repair(&settings, &GlobCandidateSource, &FsFileStore)
        .with_context(|| format!("scan {}", settings.root))?;

    for record in &outcome.records {
        println!("{}", render::file_line(record));
    }
    println!("{}", render::summary_line(&outcome.summary));

    Ok(())
}
