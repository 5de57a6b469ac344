use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use drivefind::cli::Cli;
use drivefind::model::LetterDrives;
use drivefind::search::{FileSearcher, SpecialDirFilter, VerboseProgress};
use drivefind::session::{Prompter, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let searcher = FileSearcher::new()
        .with_filter(SpecialDirFilter::default().with_extra(cli.exclude.iter().cloned()))
        .with_follow_links(!cli.no_follow_links);
    let progress = VerboseProgress::new(!cli.quiet);

    let prompt = Prompter::new(io::stdin().lock(), io::stdout());
    let report = Session::new(prompt, LetterDrives, searcher, &progress, cli.session_config()).run()?;

    tracing::debug!(
        target_name = %report.target,
        found = report.found.is_some(),
        volumes = report.volumes_scanned,
        "search finished"
    );

    Ok(())
}
