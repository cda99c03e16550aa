use std::path::PathBuf;

use clap::Args;
use courier_engine::{json::snapshot::BatchSnapshot, stops::build_stops};

use crate::render::new_table;

#[derive(Args)]
pub struct StopsArgs {
    /// Batch snapshot JSON file
    file: PathBuf,
}

pub fn run(args: StopsArgs) -> Result<(), anyhow::Error> {
    let snapshot = BatchSnapshot::read(&args.file)?;
    println!("{}", render_stops(&snapshot));

    Ok(())
}

pub fn render_stops(snapshot: &BatchSnapshot) -> String {
    let mut table = new_table(["#", "Order", "Contact", "Status", "ETA", "Distance"]);

    for stop in build_stops(&snapshot.orders, &snapshot.assignments) {
        let eta = match stop.eta_minutes {
            Some(minutes) => format!("{} ({minutes} min)", stop.eta_band.label),
            None => stop.eta_band.label.to_owned(),
        };

        table.add_row(vec![
            stop.sequence.map(|sequence| sequence.to_string()).unwrap_or_default(),
            format!("#{}", stop.order_label),
            stop.contact_name.unwrap_or_default(),
            stop.status.band().label.to_owned(),
            eta,
            stop.distance_remaining_km
                .map(|km| format!("{km:.1} km"))
                .unwrap_or_default(),
        ]);
    }

    table.to_string()
}
