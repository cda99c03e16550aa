//! Consistency checks over a batch snapshot.
//!
//! Nothing here rejects a snapshot. Issues are returned as data and logged so
//! that inconsistent upstream records are visible while every other module
//! keeps rendering them.

use fxhash::FxHashSet;
use jiff::Timestamp;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::record::{assignment::Assignment, batch::Batch, status::AssignmentStatus};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapshotIssue {
    #[error("Batch reports {delivered} delivered and {failed} failed out of {orders} orders")]
    CounterOverflow {
        delivered: u32,
        failed: u32,
        orders: usize,
    },

    #[error("Assignment for order {order_id} has both deliveredAt and failedAt")]
    ConflictingOutcome { order_id: String },

    #[error("Assignment for order {order_id} has {field} while {status}")]
    OutcomeStatusMismatch {
        order_id: String,
        field: &'static str,
        status: AssignmentStatus,
    },

    #[error("Assignment for order {order_id} is {status} without a valid timestamp")]
    MissingOutcomeTime {
        order_id: String,
        status: AssignmentStatus,
    },

    #[error("Assignment references order {order_id} which is not part of the batch")]
    ForeignOrder { order_id: String },

    #[error("{later} at {later_at} precedes {earlier} at {earlier_at}")]
    MilestoneOutOfOrder {
        earlier: &'static str,
        earlier_at: Timestamp,
        later: &'static str,
        later_at: Timestamp,
    },
}

fn check_counters(batch: &Batch, issues: &mut Vec<SnapshotIssue>) {
    let finished = batch.total_delivered as usize + batch.total_failed as usize;
    if finished > batch.order_ids.len() {
        issues.push(SnapshotIssue::CounterOverflow {
            delivered: batch.total_delivered,
            failed: batch.total_failed,
            orders: batch.order_ids.len(),
        });
    }
}

fn check_milestones(batch: &Batch, issues: &mut Vec<SnapshotIssue>) {
    let milestones = [
        ("createdAt", batch.created_at()),
        ("dispatchedAt", batch.dispatched_at()),
        ("pickedUpAt", batch.picked_up_at()),
        ("completedAt", batch.completed_at()),
    ];

    let mut latest: Option<(&'static str, Timestamp)> = None;
    for (name, at) in milestones {
        let Some(at) = at else {
            continue;
        };

        if let Some((earlier, earlier_at)) = latest {
            if at < earlier_at {
                issues.push(SnapshotIssue::MilestoneOutOfOrder {
                    earlier,
                    earlier_at,
                    later: name,
                    later_at: at,
                });
                continue;
            }
        }

        latest = Some((name, at));
    }
}

fn check_assignment(assignment: &Assignment, issues: &mut Vec<SnapshotIssue>) {
    let order_id = || assignment.order_id.clone();
    let delivered_at = assignment.delivered_at();
    let failed_at = assignment.failed_at();

    if delivered_at.is_some() && failed_at.is_some() {
        issues.push(SnapshotIssue::ConflictingOutcome {
            order_id: order_id(),
        });
    }

    if delivered_at.is_some() && assignment.status != AssignmentStatus::Delivered {
        issues.push(SnapshotIssue::OutcomeStatusMismatch {
            order_id: order_id(),
            field: "deliveredAt",
            status: assignment.status,
        });
    }

    if failed_at.is_some() && assignment.status != AssignmentStatus::Failed {
        issues.push(SnapshotIssue::OutcomeStatusMismatch {
            order_id: order_id(),
            field: "failedAt",
            status: assignment.status,
        });
    }

    let missing_time = match assignment.status {
        AssignmentStatus::Delivered => delivered_at.is_none(),
        AssignmentStatus::Failed => failed_at.is_none(),
        _ => false,
    };
    if missing_time {
        issues.push(SnapshotIssue::MissingOutcomeTime {
            order_id: order_id(),
            status: assignment.status,
        });
    }
}

/// Checks the invariants a batch snapshot is expected to hold.
#[instrument(skip_all, fields(batch = %batch.id))]
pub fn inspect(batch: &Batch, assignments: &[Assignment]) -> Vec<SnapshotIssue> {
    let mut issues = Vec::new();

    check_counters(batch, &mut issues);
    check_milestones(batch, &mut issues);

    let order_ids = batch
        .order_ids
        .iter()
        .map(String::as_str)
        .collect::<FxHashSet<_>>();

    for assignment in assignments {
        if !order_ids.contains(assignment.order_id.as_str()) {
            issues.push(SnapshotIssue::ForeignOrder {
                order_id: assignment.order_id.clone(),
            });
        }

        check_assignment(assignment, &mut issues);
    }

    for issue in &issues {
        warn!(%issue, "Inconsistent batch snapshot");
    }

    issues
}
