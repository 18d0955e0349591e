use anyhow::{Context, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use ripple_grid_core::{GridSession, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::driver::Mode;

mod command;
mod driver;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Speak the JSON line protocol instead of text commands
    #[arg(long)]
    json: bool,

    /// How many snapshots `undo` can walk back
    #[arg(long, default_value_t = SessionConfig::DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

/// Routes `log` records through a fmt subscriber; `RUST_LOG` wins over the flags.
fn init_logging(verbose: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    let level = verbose.log_level_filter().to_string().to_lowercase();
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose)?;
    log::debug!("{args:?}");

    let session = GridSession::new(SessionConfig::new(args.history_limit));
    let mode = if args.json { Mode::Json } else { Mode::Text };
    let output = io::stdout().lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open script {}", path.display()))?;
            driver::run(BufReader::new(file), output, mode, session)
        }
        None => driver::run(io::stdin().lock(), output, mode, session),
    }
}
