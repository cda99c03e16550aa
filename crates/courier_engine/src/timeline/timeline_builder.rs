use fxhash::{FxHashMap, FxHashSet};
use tracing::instrument;

use crate::{
    record::{
        assignment::Assignment,
        batch::Batch,
        order::{Order, order_label},
    },
    timeline::timeline_event::{TimelineCategory, TimelineEvent},
    utils::{self, absent_last},
};

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

fn batch_events(batch: &Batch) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    events.push(TimelineEvent::new(
        batch.created_at(),
        TimelineCategory::Created,
        "Batch created",
        Some(plural(batch.order_ids.len(), "order")),
    ));

    if let Some(optimized_at) = batch.optimized_at() {
        let distance = batch
            .route_optimization
            .as_ref()
            .and_then(|route| route.total_distance_km())
            .map(|km| format!("{km:.1} km route"));

        events.push(TimelineEvent::new(
            Some(optimized_at),
            TimelineCategory::RouteOptimized,
            "Route optimized",
            distance,
        ));
    }

    if let Some(dispatched_at) = batch.dispatched_at() {
        let mode = batch
            .assignment_strategy
            .as_ref()
            .and_then(|strategy| strategy.mode_label())
            .map(|mode| format!("Mode: {mode}"));

        events.push(TimelineEvent::new(
            Some(dispatched_at),
            TimelineCategory::Dispatched,
            "Dispatched",
            mode,
        ));
    }

    if let (Some(assigned_at), Some(driver)) = (batch.driver_assigned_at(), &batch.driver) {
        let name = driver.name.as_deref().unwrap_or("driver");
        let score = batch
            .assigned_score()
            .map(|score| format!("Score: {}", utils::round_one_decimal(score)));

        events.push(TimelineEvent::new(
            Some(assigned_at),
            TimelineCategory::DriverAssigned,
            format!("Assigned to {name}"),
            score,
        ));
    }

    if let Some(picked_up_at) = batch.picked_up_at() {
        let kitchen = batch.kitchen_name().unwrap_or("kitchen");

        events.push(TimelineEvent::new(
            Some(picked_up_at),
            TimelineCategory::PickedUp,
            "Picked up",
            Some(format!("Collected from {kitchen}")),
        ));
    }

    events
}

fn outcome_events(
    assignments: &[Assignment],
    orders_by_id: &FxHashMap<&str, &Order>,
) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for assignment in assignments {
        let order = orders_by_id.get(assignment.order_id.as_str()).copied();
        let label = order_label(order, &assignment.order_id);

        if let Some(delivered_at) = assignment.delivered_at() {
            events.push(TimelineEvent::new(
                Some(delivered_at),
                TimelineCategory::Delivered,
                format!("Order #{label} delivered"),
                order.and_then(Order::contact_name).map(str::to_owned),
            ));
        }

        if let Some(failed_at) = assignment.failed_at() {
            events.push(TimelineEvent::new(
                Some(failed_at),
                TimelineCategory::Failed,
                format!("Order #{label} failed"),
                assignment.failure_reason.clone(),
            ));
        }
    }

    events
}

/// Reconstructs the history of a batch as one chronological sequence.
///
/// Dated events are sorted ascending. Pending orders carry no time and come
/// after every dated event in their input order. The sort is stable, so events
/// sharing a timestamp keep the order in which they were produced.
#[instrument(skip_all, level = "debug", fields(batch = %batch.id))]
pub fn build_timeline(
    batch: &Batch,
    orders: &[Order],
    assignments: &[Assignment],
) -> Vec<TimelineEvent> {
    let orders_by_id = orders
        .iter()
        .map(|order| (order.id.as_str(), order))
        .collect::<FxHashMap<_, _>>();

    let mut events = batch_events(batch);
    events.extend(outcome_events(assignments, &orders_by_id));

    if let Some(completed_at) = batch.completed_at() {
        events.push(TimelineEvent::new(
            Some(completed_at),
            TimelineCategory::Completed,
            "Batch completed",
            Some(format!(
                "{} delivered, {} failed",
                batch.total_delivered, batch.total_failed
            )),
        ));
    }

    let finished = assignments
        .iter()
        .filter(|assignment| assignment.has_outcome())
        .map(|assignment| assignment.order_id.as_str())
        .collect::<FxHashSet<_>>();

    events.extend(
        orders
            .iter()
            .filter(|order| !finished.contains(order.id.as_str()))
            .map(|order| {
                TimelineEvent::new(
                    None,
                    TimelineCategory::Pending,
                    format!("Order #{} pending", order.label()),
                    order.contact_name().map(str::to_owned),
                )
            }),
    );

    events.sort_by(|a, b| absent_last(&a.time(), &b.time()));

    events
}
