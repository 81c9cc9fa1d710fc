//! CLI Adapter.

mod export;
mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ipex")]
#[command(version)]
#[command(
    about = "Export generated IP core descriptors (.xci) into the project source tree",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy every descriptor into <out>/<base_name>/
    #[clap(visible_alias = "e")]
    Export {
        #[command(flatten)]
        target: TargetArgs,
        /// Show planned copies without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List discovered descriptors and their destinations
    #[clap(visible_alias = "ls")]
    List {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Project location arguments shared by all commands.
#[derive(Args)]
struct TargetArgs {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Output directory relative to the project root (overrides ipex.toml)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,
}

impl TargetArgs {
    fn project_root(&self) -> Result<PathBuf, AppError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Export { target, dry_run } => export::run_export(&target, dry_run),
        Commands::List { target } => list::run_list(&target),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
