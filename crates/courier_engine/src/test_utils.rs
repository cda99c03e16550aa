use rand::Rng;

use crate::record::{
    assignment::Assignment,
    batch::{Batch, NamedRef},
    order::{DeliveryAddress, Order, OrderNumber},
    status::{AssignmentStatus, BatchStatus, MealWindow, OrderStatus},
};

pub fn create_batch(id: &str, status: BatchStatus, meal_window: MealWindow) -> Batch {
    Batch {
        id: id.to_owned(),
        batch_number: Some(format!("B-{id}")),
        status,
        meal_window,
        kitchen: Some(NamedRef {
            id: String::from("kitchen_1"),
            name: Some(String::from("Central Kitchen")),
        }),
        ..Batch::default()
    }
}

pub fn create_order(id: &str, order_number: &str, contact_name: &str) -> Order {
    Order {
        id: id.to_owned(),
        order_number: Some(OrderNumber::from(order_number)),
        status: OrderStatus::Ready,
        meal_window: MealWindow::Lunch,
        delivery_address: Some(DeliveryAddress {
            contact_name: Some(contact_name.to_owned()),
            ..DeliveryAddress::default()
        }),
        ..Order::default()
    }
}

pub fn create_delivered_assignment(order_id: &str, delivered_at: &str) -> Assignment {
    Assignment {
        order_id: order_id.to_owned(),
        status: AssignmentStatus::Delivered,
        delivered_at: Some(delivered_at.to_owned()),
        ..Assignment::default()
    }
}

pub fn create_failed_assignment(order_id: &str, failed_at: &str, reason: &str) -> Assignment {
    Assignment {
        order_id: order_id.to_owned(),
        status: AssignmentStatus::Failed,
        failed_at: Some(failed_at.to_owned()),
        failure_reason: Some(reason.to_owned()),
        ..Assignment::default()
    }
}

pub fn create_pending_assignment(order_id: &str) -> Assignment {
    Assignment {
        order_id: order_id.to_owned(),
        status: AssignmentStatus::EnRoute,
        ..Assignment::default()
    }
}

/// Batches with random statuses, windows and counters. Unknown statuses are
/// included on purpose.
pub fn create_random_batches<R: Rng>(rng: &mut R, count: usize) -> Vec<Batch> {
    const STATUSES: [BatchStatus; 8] = [
        BatchStatus::Collecting,
        BatchStatus::ReadyForDispatch,
        BatchStatus::Dispatched,
        BatchStatus::InProgress,
        BatchStatus::Completed,
        BatchStatus::PartialComplete,
        BatchStatus::Cancelled,
        BatchStatus::Unknown,
    ];
    const WINDOWS: [MealWindow; 3] = [MealWindow::Lunch, MealWindow::Dinner, MealWindow::Unknown];

    (0..count)
        .map(|index| {
            let status = STATUSES[rng.random_range(0..STATUSES.len())];
            let window = WINDOWS[rng.random_range(0..WINDOWS.len())];
            let mut batch = create_batch(&format!("batch_{index}"), status, window);

            let orders = rng.random_range(0..8);
            batch.order_ids = (0..orders).map(|o| format!("order_{index}_{o}")).collect();
            batch.total_delivered = rng.random_range(0..=orders);
            batch.total_failed = rng.random_range(0..=(orders - batch.total_delivered));

            batch
        })
        .collect()
}
