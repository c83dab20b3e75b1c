//! git-bugreport collects what the git developers usually ask for when a bug
//! is reported: version and platform details, the non-sensitive part of the
//! configuration, which hooks are enabled and the shape of the object store.
//! It writes all of it below a short questionnaire and opens the result in
//! your editor so you can fill it in and strip anything you'd rather not send.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "git-bugreport")]
#[command(about = "Collect information for a git bug report")]
struct Cli {
    /// Specify a destination for the bugreport file
    #[arg(short, long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    git_bugreport::utils::create_bug_report(cli.output.as_deref())?;
    Ok(())
}
