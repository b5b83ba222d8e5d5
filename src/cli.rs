//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use lintgate::output::OutputMode;

/// lintgate - lint staged files before commit
#[derive(Parser, Debug)]
#[command(
    name = "lintgate",
    version,
    about = "Lint staged source files before commit",
    long_about = "Blocks commits when staged source files fail lint.\n\n\
                  Resolves the files staged for the next commit, runs the lint\n\
                  engine over the source files among them, and exits non-zero\n\
                  on any finding so git aborts the commit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lint pass over staged files (default, used by the hook)
    Run,

    /// Install the pre-commit hook into .git/hooks
    Install {
        /// Overwrite an existing lintgate hook entry
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run) | None => commands::run(output_mode),
        Some(Command::Install { force }) => commands::install(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lintgate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
