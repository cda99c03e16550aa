use std::{path::PathBuf, thread};

use clap::Args;
use courier_engine::{json::snapshot::BatchSnapshot, params::EngineParams};
use jiff::{SignedDuration, Timestamp};
use tracing::{info, warn};

use crate::{parsers, timeline::render_batch};

#[derive(Args)]
pub struct WatchArgs {
    /// Batch snapshot JSON file, re-read on every tick
    file: PathBuf,

    /// Refresh interval (e.g., "12s", "PT1M"), defaults to COURIER_REFRESH_INTERVAL
    #[arg(short, long, value_parser = parsers::parse_interval)]
    interval: Option<SignedDuration>,

    /// Stop after this many refreshes
    #[arg(long)]
    ticks: Option<usize>,
}

pub fn run(args: WatchArgs, params: &EngineParams) -> Result<(), anyhow::Error> {
    let interval = args.interval.unwrap_or(params.refresh_interval);
    info!("Watching {:?} every {interval}", args.file);

    let mut tick = 0;
    loop {
        match BatchSnapshot::read(&args.file) {
            Ok(snapshot) => {
                // Clear the screen and move the cursor home.
                print!("\x1B[2J\x1B[H");
                println!("{}", render_batch(&snapshot, params, Timestamp::now()));

                if snapshot.batch.status.is_terminal() {
                    info!(status = %snapshot.batch.status, "Batch reached a final status");
                    break;
                }
            }
            Err(err) => warn!(%err, "Keeping previous view"),
        }

        tick += 1;
        if args.ticks.is_some_and(|ticks| tick >= ticks) {
            break;
        }

        thread::sleep(interval.unsigned_abs());
    }

    Ok(())
}
