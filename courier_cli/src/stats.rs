use std::path::PathBuf;

use clap::Args;
use courier_engine::{
    json::snapshot::KitchenSnapshot,
    record::status::MealWindow,
    stats::batch_stats::{BatchStats, StatsQuery, aggregate},
};

use crate::{parsers, render::new_table};

#[derive(Args)]
pub struct StatsArgs {
    /// Kitchen snapshot JSON file
    file: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_meal_window)]
    window: MealWindow,

    /// Only count batches and orders of this kitchen
    #[arg(short, long)]
    kitchen: Option<String>,

    /// Include delivery performance, reserved for authority roles
    #[arg(long)]
    authority: bool,

    /// Print the stats as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: StatsArgs) -> Result<(), anyhow::Error> {
    let snapshot = KitchenSnapshot::read(&args.file)?;

    let mut query = StatsQuery::new(args.window).with_performance(args.authority);
    if let Some(kitchen) = args.kitchen {
        query = query.with_kitchen(kitchen);
    }

    let stats = aggregate(&snapshot.batches, &snapshot.orders, &query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", render_stats(&stats));
    }

    Ok(())
}

pub fn render_stats(stats: &BatchStats) -> String {
    let mut counts = new_table(["Status", "Batches"]);
    for (status, count) in stats.by_status.iter() {
        counts.add_row(vec![status.band().label.to_owned(), count.to_string()]);
    }
    counts.add_row(vec![String::from("Total"), stats.by_status.total().to_string()]);
    if stats.by_status.unrecognized() > 0 {
        counts.add_row(vec![
            String::from("Unrecognized"),
            stats.by_status.unrecognized().to_string(),
        ]);
    }

    let mut overview = new_table(["Window", "Available for batching", "Ready to dispatch"]);
    overview.add_row(vec![
        stats.meal_window.to_string(),
        stats.available_for_batching.to_string(),
        stats.ready_to_dispatch.to_string(),
    ]);

    let mut output = format!("{overview}\n{counts}");

    if let Some(performance) = &stats.performance {
        let mut table = new_table(["Orders", "Delivered", "Failed", "Success rate", "Per batch"]);
        table.add_row(vec![
            performance.total_orders.to_string(),
            performance.successful_deliveries.to_string(),
            performance.failed_deliveries.to_string(),
            format!("{}%", performance.success_rate),
            format!("{:.1}", performance.average_deliveries_per_batch),
        ]);
        output = format!("{output}\n{table}");
    }

    output
}
