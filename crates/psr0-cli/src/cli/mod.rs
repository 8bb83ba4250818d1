//! CLI for inspecting PSR-0 class resolution.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use psr0_core::config::{self, Psr0Config};
use psr0_core::{LoaderChain, SearchPath};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_load, run_loaders, run_manpage, run_resolve};

/// Top-level CLI for the psr0 class resolver.
#[derive(Debug, Parser)]
#[command(name = "psr0")]
#[command(about = "psr0: PSR-0 namespace-to-directory class resolver", long_about = None)]
pub struct Cli {
    /// Read loaders from this file instead of ~/.config/psr0/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the file each loader would use for a class.
    Resolve {
        /// Fully-qualified class name, e.g. 'Project\Core\Widgets\Button'.
        class: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load one or more classes through the loader chain.
    Load {
        /// Fully-qualified class names.
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// List configured loaders and the search path.
    Loaders,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page (roff) to stdout.
    Manpage,
}

/// Config from `--config` if given, otherwise the XDG default (created on first use).
fn load_config(path: Option<&Path>) -> Result<Psr0Config> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

/// Loader chain from config; `PSR0_INCLUDE_PATH` overrides the configured search path.
fn build_chain(cfg: &Psr0Config) -> LoaderChain {
    let chain = LoaderChain::from_config(cfg);
    match SearchPath::from_env() {
        Some(sp) => chain.with_search_path(sp),
        None => chain,
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Manpage => return run_manpage(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let chain = build_chain(&cfg);

        match cli.command {
            CliCommand::Resolve { class, json } => run_resolve(&chain, &class, json)?,
            CliCommand::Load { classes } => run_load(&chain, &classes)?,
            CliCommand::Loaders => run_loaders(&chain)?,
            CliCommand::Completions { .. } | CliCommand::Manpage => {}
        }

        Ok(())
    }
}
