// basics/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

use todo_basics::{script, Config, ConfigLoader};

#[derive(Parser)]
#[command(name = "todo-basics", version, about = "In-memory todo list walkthrough")]
struct Args {
    /// Extra config file, applied over the user and workspace layers
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the prompt but do not read a new todo from stdin
    #[arg(long)]
    no_input: bool,
}

/// Applies the command line on top of the file layers.
fn resolve_config(args: Args, loader: ConfigLoader) -> Result<Config> {
    let mut config = loader.with_explicit(args.config).load()?;
    if args.no_input { config.read_input = false; }
    Ok(config)
}

fn main() -> Result<()> {
    // stdout carries the report; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = resolve_config(args, ConfigLoader::new(cwd))?;

    let mut out = io::stdout().lock();
    script::run(&config, io::stdin().lock(), &mut out)?;
    Ok(())
}
