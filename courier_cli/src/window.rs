use std::path::PathBuf;

use clap::Args;
use courier_engine::{
    dispatch_window::{
        calculator::{DispatchWindowStatus, evaluate},
        clock_time::ClockTime,
    },
    json::snapshot::KitchenSnapshot,
    params::EngineParams,
    record::status::MealWindow,
};
use jiff::{Timestamp, civil::Time};
use tracing::info;

use crate::{
    parsers,
    render::{new_table, yes_no},
};

#[derive(Args)]
pub struct WindowArgs {
    /// Kitchen snapshot JSON file holding the operating hours
    file: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_meal_window)]
    window: MealWindow,

    /// Evaluate at this wall-clock time instead of now (e.g., "13:45")
    #[arg(long, value_parser = parsers::parse_clock_time)]
    at: Option<ClockTime>,

    /// Dispatch regardless of the cutoff
    #[arg(long)]
    force: bool,
}

pub fn run(args: WindowArgs, params: &EngineParams) -> Result<(), anyhow::Error> {
    let snapshot = KitchenSnapshot::read(&args.file)?;

    let now = match args.at {
        Some(at) => Time::from(at),
        None => Timestamp::now().to_zoned(params.time_zone.clone()).time(),
    };

    let status = evaluate(
        args.window,
        snapshot.operating_hours.as_ref(),
        now,
        args.force,
    );

    if status.forced && !status.eligible {
        info!(window = %status.meal_window, "Dispatch forced before cutoff");
    }

    println!("{}", render_window(&status));

    Ok(())
}

pub fn render_window(status: &DispatchWindowStatus) -> String {
    let mut table = new_table(["Window", "Cutoff", "Remaining", "Eligible", "Forced", "Dispatch"]);
    table.add_row(vec![
        status.meal_window.to_string(),
        status.formatted_cutoff.clone(),
        status.time_remaining.clone(),
        yes_no(status.eligible).to_owned(),
        yes_no(status.forced).to_owned(),
        yes_no(status.eligible || status.forced).to_owned(),
    ]);

    table.to_string()
}
