use fxhash::FxHashMap;
use serde::Serialize;
use tracing::instrument;

use crate::{
    display_band::DisplayBand,
    eta,
    record::{
        assignment::Assignment,
        order::{Order, order_label},
        status::AssignmentStatus,
    },
    utils::{absent_last, round_one_decimal},
};

/// One drop-off of a driver run with its ETA health.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub sequence: Option<u32>,
    pub order_id: String,
    pub order_label: String,
    pub contact_name: Option<String>,
    pub status: AssignmentStatus,
    pub eta_band: DisplayBand,
    /// Whole minutes, rounded up.
    pub eta_minutes: Option<u64>,
    pub distance_remaining_km: Option<f64>,
}

impl Stop {
    fn new(assignment: &Assignment, order: Option<&Order>) -> Self {
        let tracking = assignment.eta_tracking.as_ref();

        Stop {
            sequence: assignment.sequence_number(),
            order_id: assignment.order_id.clone(),
            order_label: order_label(order, &assignment.order_id),
            contact_name: order.and_then(Order::contact_name).map(str::to_owned),
            status: assignment.status,
            eta_band: eta::classify(assignment.eta_status()),
            eta_minutes: tracking
                .and_then(|tracking| tracking.eta_seconds)
                .filter(|seconds| seconds.is_finite())
                .map(|seconds| (seconds.max(0.0) / 60.0).ceil() as u64),
            distance_remaining_km: tracking
                .and_then(|tracking| tracking.distance_remaining_meters)
                .filter(|meters| meters.is_finite())
                .map(|meters| round_one_decimal(meters.max(0.0) / 1000.0)),
        }
    }
}

/// One stop per assignment, ordered by route sequence. Assignments without a
/// sequence number follow in input order.
#[instrument(skip_all, level = "debug")]
pub fn build_stops(orders: &[Order], assignments: &[Assignment]) -> Vec<Stop> {
    let orders_by_id = orders
        .iter()
        .map(|order| (order.id.as_str(), order))
        .collect::<FxHashMap<_, _>>();

    let mut stops = assignments
        .iter()
        .map(|assignment| {
            let order = orders_by_id.get(assignment.order_id.as_str()).copied();
            Stop::new(assignment, order)
        })
        .collect::<Vec<_>>();

    stops.sort_by(|a, b| absent_last(&a.sequence, &b.sequence));

    stops
}
