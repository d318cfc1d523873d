use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_flux::cli::orchestration::{run_derive_workflow, DeriveWorkflowArgs};
use git_flux::ui;
use git_flux::FluxError;

#[derive(clap::Parser)]
#[command(
    name = "git-flux",
    version,
    about = "Derive the release version and compatibility requirement from git branch and tag names"
)]
struct Args {
    #[arg(short = 'C', long = "repo", default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Version the artifact was first published in (X.Y.Z)")]
    since: Option<String>,

    #[arg(short, long, help = "Write the derived version to this file")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Print only the version string")]
    quiet: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "git_flux=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let workflow_args = DeriveWorkflowArgs {
        config_path: args.config,
        repo_path: args.repo,
        since: args.since,
        output: args.output,
    };

    let result = match run_derive_workflow(&workflow_args) {
        Ok(result) => result,
        Err(e @ FluxError::Selection(_)) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if args.quiet {
        println!("{}", result.derivation.version);
        return Ok(());
    }

    ui::display_derivation(&result.derivation);
    if let Some(path) = &result.written_to {
        ui::display_success(&format!("Wrote version to {}", path.display()));
    }

    Ok(())
}
