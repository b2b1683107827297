//! Age gate terminal entry point.
//!
//! # Usage
//!
//! ```bash
//! # Gate backed by ./agegate.json
//! agegate
//!
//! # Custom record location and a pinned validation year (for demos)
//! agegate --store /tmp/unlock.json --year 2026
//! ```

use std::{fs::File, path::PathBuf, sync::Arc};

use agegate_app::Runtime;
use agegate_core::{Clock, SystemClock};
use agegate_store::JsonStore;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod driver;
mod ui;

use driver::TerminalDriver;

/// Age gate terminal UI
#[derive(Parser, Debug)]
#[command(name = "agegate")]
#[command(about = "Birthdate gate with a persistent unlock record")]
#[command(version)]
struct Args {
    /// Path of the unlock-record file
    #[arg(short, long, default_value = "agegate.json")]
    store: PathBuf,

    /// Write logs to this file (stderr is owned by the TUI)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Override the validation year (defaults to the system calendar)
    #[arg(long)]
    year: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let file = File::create(path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let current_year = args.year.unwrap_or_else(|| SystemClock.current_year());
    let store = JsonStore::new(args.store);

    let driver = TerminalDriver::new(store)?;
    let mut runtime = Runtime::new(driver, current_year);
    Ok(runtime.run().await?)
}
