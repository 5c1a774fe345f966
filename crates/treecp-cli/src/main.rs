//! treecp - recursive copy and move with a few policy toggles
//!
//! Copies files and directory trees to a destination, optionally clearing
//! read-only flags on targets, leaving out empty directories, and deleting
//! each source once it was copied without any error.

mod display;

use anyhow::Result;
use clap::Parser;
use display::{ConsoleReporter, RunSummary};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use treecp_engine::Copier;
use treecp_types::{CopyPolicy, Error};

/// treecp - copy (or move) files and directory trees
#[derive(Parser, Debug)]
#[command(
    name = "treecp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy files and directory trees, optionally as a move",
    long_about = "Copies one or more source files or directories to a destination.\n\
                  The last path is the destination; with several sources it is always\n\
                  treated as a directory."
)]
struct Cli {
    /// Force copy (overwrite read-only files)
    #[arg(short, long)]
    force_overwrite: bool,

    /// Recursive copy without empty directories
    #[arg(short = 'w', long)]
    without_empty_dirs: bool,

    /// After a successful copy, delete the source path
    #[arg(short = 'x', long)]
    delete_source: bool,

    /// Quiet mode - only errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode - log each source and a final summary
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Source paths followed by the destination path
    #[arg(value_name = "PATH", required = true, num_args = 2..)]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn policy(&self) -> CopyPolicy {
        CopyPolicy::new()
            .with_force_overwrite(self.force_overwrite)
            .with_skip_empty_dirs(self.without_empty_dirs)
            .with_delete_source(self.delete_source)
            .with_destination_is_directory(self.paths.len() > 2)
    }

    fn sources_and_destination(&self) -> Result<(&[PathBuf], &Path), Error> {
        match self.paths.split_last() {
            Some((destination, sources)) if !sources.is_empty() => Ok((sources, destination)),
            _ => Err(Error::invalid_invocation("Not enough parameters")),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.debug, cli.quiet, cli.verbose)?;

    info!("treecp v{} starting", env!("CARGO_PKG_VERSION"));

    let (sources, destination) = cli.sources_and_destination()?;
    let copier = Copier::new(cli.policy());
    let mut reporter = ConsoleReporter::new(cli.quiet);

    let reports = copier.copy_all(sources, destination, &mut reporter);
    let summary = RunSummary::from_reports(&reports);
    info!("{}", summary.describe());

    Ok(if summary.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(debug: bool, quiet: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
