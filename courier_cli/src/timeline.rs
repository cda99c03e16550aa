use std::path::PathBuf;

use clap::Args;
use courier_engine::{
    driver_freshness::DriverFreshness, inspect::inspect, json::snapshot::BatchSnapshot,
    params::EngineParams, progress::BatchProgress, route_summary::RouteSummary, time_field,
    timeline::timeline_builder::build_timeline,
};
use jiff::Timestamp;

use crate::render::new_table;

#[derive(Args)]
pub struct TimelineArgs {
    /// Batch snapshot JSON file
    file: PathBuf,
}

pub fn run(args: TimelineArgs, params: &EngineParams) -> Result<(), anyhow::Error> {
    let snapshot = BatchSnapshot::read(&args.file)?;
    println!("{}", render_batch(&snapshot, params, Timestamp::now()));

    Ok(())
}

/// Summary of the batch followed by its reconstructed timeline.
pub fn render_batch(snapshot: &BatchSnapshot, params: &EngineParams, now: Timestamp) -> String {
    let batch = &snapshot.batch;
    let issues = inspect(batch, &snapshot.assignments);

    let progress = BatchProgress::of(batch);
    let route = RouteSummary::of(batch.route_optimization.as_ref());

    let driver = match (&batch.driver, snapshot.assigned_driver()) {
        (None, _) => String::from("Unassigned"),
        (Some(driver), position) => {
            let name = driver.name.as_deref().unwrap_or(driver.id.as_str());
            match position {
                Some(position) => {
                    let freshness = DriverFreshness::of(&position, now, params);
                    let stale = if freshness.stale { ", stale" } else { "" };
                    format!("{name} (seen {}{stale})", freshness.last_seen)
                }
                None => name.to_owned(),
            }
        }
    };

    let progress = if progress.is_finished() {
        format!("finished, {} failed", progress.failed)
    } else {
        format!(
            "{}/{} done ({}%), {} failed",
            progress.delivered + progress.failed,
            progress.total,
            progress.percent,
            progress.failed
        )
    };

    let mut summary = new_table([
        "Batch", "Status", "Window", "Created", "Driver", "Progress", "Route", "Issues",
    ]);
    summary.add_row(vec![
        batch.label(),
        batch.status.band().label.to_owned(),
        batch.meal_window.to_string(),
        time_field::display_raw_time(batch.created_at.as_deref(), &params.time_zone),
        driver,
        progress,
        format!("{} / {} ({})", route.distance, route.duration, route.algorithm),
        issues.len().to_string(),
    ]);

    let mut timeline = new_table(["Time", "Kind", "Event", "Details"]);
    for event in build_timeline(batch, &snapshot.orders, &snapshot.assignments) {
        timeline.add_row(vec![
            event.display_time(&params.time_zone),
            event.category().to_string(),
            event.title().to_owned(),
            event.subtitle().unwrap_or_default().to_owned(),
        ]);
    }

    format!("{summary}\n{timeline}")
}
