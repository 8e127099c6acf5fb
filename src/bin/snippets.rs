//! Runner for every snippet in the crate.
//!
//! Run with: cargo run --bin snippets -- run --all

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use lambda_algorithms::{Snippet, SnippetConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "List and run the closure and sequence-algorithm snippets")]
struct Args {
    /// TOML file overriding the snippet inputs
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every snippet with a short description
    List,
    /// Print the output of one or more snippets
    Run {
        /// Snippet names, e.g. `capture piped-views`
        #[arg(required_unless_present = "all")]
        names: Vec<Snippet>,

        /// Run every snippet in order
        #[arg(long, conflicts_with = "names")]
        all: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::List => {
            for snippet in Snippet::ALL {
                println!("{:<18} {}", snippet.name().bold(), snippet.description());
            }
        }
        Command::Run { names, all } => {
            let config = SnippetConfig::load_or_default(args.config.as_deref())
                .context("could not load snippet config")?;
            let selected = if all { Snippet::ALL.to_vec() } else { names };

            for (i, snippet) in selected.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", format!("=== {} ===", snippet).cyan().bold());
                let lines = snippet
                    .render(&config)
                    .with_context(|| format!("snippet '{}' failed", snippet))?;
                for line in lines {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
