use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    record::{
        batch::Batch,
        order::Order,
        status::{BatchStatus, MealWindow},
    },
    stats::{delivery_performance::DeliveryPerformance, status_counts::StatusCounts},
};

/// Which slice of the dashboard to compute.
#[derive(Debug, Clone, Default)]
pub struct StatsQuery {
    pub meal_window: MealWindow,
    pub kitchen_id: Option<String>,
    /// Include the delivery performance block. Reserved for authority roles.
    pub include_performance: bool,
}

impl StatsQuery {
    pub fn new(meal_window: MealWindow) -> Self {
        StatsQuery {
            meal_window,
            ..StatsQuery::default()
        }
    }

    pub fn with_kitchen(mut self, kitchen_id: impl Into<String>) -> Self {
        self.kitchen_id = Some(kitchen_id.into());
        self
    }

    pub fn with_performance(mut self, include_performance: bool) -> Self {
        self.include_performance = include_performance;
        self
    }

    fn matches_kitchen(&self, kitchen_id: Option<&str>) -> bool {
        match self.kitchen_id.as_deref() {
            Some(expected) => kitchen_id == Some(expected),
            None => true,
        }
    }

    fn matches_batch(&self, batch: &Batch) -> bool {
        batch.meal_window == self.meal_window && self.matches_kitchen(batch.kitchen_id())
    }

    fn matches_order(&self, order: &Order) -> bool {
        // Orders that do not name a kitchen are assumed to belong to the
        // kitchen the collection was fetched for.
        order.meal_window == self.meal_window
            && (order.kitchen_id.is_none() || self.matches_kitchen(order.kitchen_id.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    pub meal_window: MealWindow,
    pub available_for_batching: usize,
    pub ready_to_dispatch: usize,
    pub by_status: StatusCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<DeliveryPerformance>,
}

/// Reduces a date-bounded set of batches and orders to dashboard counts for
/// one kitchen and meal window.
#[instrument(skip_all, fields(meal_window = %query.meal_window, batches = batches.len(), orders = orders.len()))]
pub fn aggregate(batches: &[Batch], orders: &[Order], query: &StatsQuery) -> BatchStats {
    let available_for_batching = orders
        .iter()
        .filter(|order| {
            query.matches_order(order) && order.status.is_batchable() && !order.is_batched()
        })
        .count();

    let window_batches = batches
        .iter()
        .filter(|batch| query.matches_batch(batch))
        .collect::<Vec<_>>();

    let by_status = StatusCounts::from_statuses(window_batches.iter().map(|batch| batch.status));
    if by_status.unrecognized() > 0 {
        debug!(
            unrecognized = by_status.unrecognized(),
            "Batches with an unrecognized status left out of the counts"
        );
    }

    // Same population as the status buckets.
    let performance = query
        .include_performance
        .then(|| DeliveryPerformance::from_batches(
            window_batches
                .iter()
                .copied()
                .filter(|batch| batch.status.is_known()),
        ));

    BatchStats {
        meal_window: query.meal_window,
        available_for_batching,
        ready_to_dispatch: by_status.get(BatchStatus::Collecting),
        by_status,
        performance,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{record::status::OrderStatus, test_utils};

    fn batches(window: MealWindow, statuses: &[(BatchStatus, usize)]) -> Vec<Batch> {
        statuses
            .iter()
            .flat_map(|&(status, count)| (0..count).map(move |_| status))
            .enumerate()
            .map(|(index, status)| test_utils::create_batch(&format!("{index}"), status, window))
            .collect()
    }

    #[test]
    fn test_lunch_window_counts() {
        let batches = batches(
            MealWindow::Lunch,
            &[
                (BatchStatus::Completed, 3),
                (BatchStatus::Cancelled, 2),
                (BatchStatus::Collecting, 5),
            ],
        );

        let stats = aggregate(&batches, &[], &StatsQuery::new(MealWindow::Lunch));
        let counts = &stats.by_status;

        assert_eq!(counts.get(BatchStatus::Collecting), 5);
        assert_eq!(counts.get(BatchStatus::Completed), 3);
        assert_eq!(counts.get(BatchStatus::Cancelled), 2);
        assert_eq!(counts.get(BatchStatus::ReadyForDispatch), 0);
        assert_eq!(counts.get(BatchStatus::Dispatched), 0);
        assert_eq!(counts.get(BatchStatus::InProgress), 0);
        assert_eq!(counts.get(BatchStatus::PartialComplete), 0);
        assert_eq!(counts.total(), 10);
        assert_eq!(stats.ready_to_dispatch, 5);
        assert_eq!(stats.performance, None);
    }

    #[test]
    fn test_other_window_is_excluded() {
        let mut all = batches(MealWindow::Lunch, &[(BatchStatus::Collecting, 2)]);
        all.extend(batches(MealWindow::Dinner, &[(BatchStatus::Collecting, 4)]));

        let stats = aggregate(&all, &[], &StatsQuery::new(MealWindow::Dinner));

        assert_eq!(stats.by_status.total(), 4);
        assert_eq!(stats.ready_to_dispatch, 4);
    }

    #[test]
    fn test_kitchen_filter() {
        let mut all = batches(MealWindow::Lunch, &[(BatchStatus::Dispatched, 3)]);
        all[0].kitchen = None;

        let query = StatsQuery::new(MealWindow::Lunch).with_kitchen("kitchen_1");
        let stats = aggregate(&all, &[], &query);
        assert_eq!(stats.by_status.get(BatchStatus::Dispatched), 2);

        let query = StatsQuery::new(MealWindow::Lunch).with_kitchen("kitchen_2");
        let stats = aggregate(&all, &[], &query);
        assert_eq!(stats.by_status.total(), 0);
    }

    #[test]
    fn test_available_for_batching() {
        let mut orders = vec![
            test_utils::create_order("o1", "1", "A"),
            test_utils::create_order("o2", "2", "B"),
            test_utils::create_order("o3", "3", "C"),
            test_utils::create_order("o4", "4", "D"),
            test_utils::create_order("o5", "5", "E"),
        ];
        orders[1].batch_id = Some(String::from("b1"));
        orders[2].status = OrderStatus::PickedUp;
        orders[3].meal_window = MealWindow::Dinner;
        orders[4].status = OrderStatus::Placed;

        let stats = aggregate(&[], &orders, &StatsQuery::new(MealWindow::Lunch));

        assert_eq!(stats.available_for_batching, 2);
    }

    #[test]
    fn test_performance_block() {
        let mut batches = batches(
            MealWindow::Lunch,
            &[(BatchStatus::Completed, 1), (BatchStatus::PartialComplete, 1)],
        );
        batches[0].order_ids = vec![String::from("o1"), String::from("o2")];
        batches[0].total_delivered = 2;
        batches[1].order_ids = vec![String::from("o3"), String::from("o4")];
        batches[1].total_delivered = 1;
        batches[1].total_failed = 1;

        let query = StatsQuery::new(MealWindow::Lunch).with_performance(true);
        let performance = aggregate(&batches, &[], &query).performance.unwrap();

        assert_eq!(performance.total_orders, 4);
        assert_eq!(performance.successful_deliveries, 3);
        assert_eq!(performance.failed_deliveries, 1);
        assert_eq!(performance.success_rate, 75);
        assert_eq!(performance.average_deliveries_per_batch, 1.5);
    }

    #[test]
    fn test_performance_skips_unrecognized_status() {
        let mut batches = batches(
            MealWindow::Lunch,
            &[(BatchStatus::Completed, 1), (BatchStatus::Unknown, 1)],
        );
        batches[0].order_ids = vec![String::from("o1"), String::from("o2")];
        batches[0].total_delivered = 2;
        batches[1].order_ids = vec![String::from("o3")];
        batches[1].total_failed = 1;

        let query = StatsQuery::new(MealWindow::Lunch).with_performance(true);
        let stats = aggregate(&batches, &[], &query);
        let performance = stats.performance.unwrap();

        assert_eq!(stats.by_status.total(), 1);
        assert_eq!(performance.total_orders, 2);
        assert_eq!(performance.failed_deliveries, 0);
        assert_eq!(performance.success_rate, 100);
        assert_eq!(performance.average_deliveries_per_batch, 2.0);
    }

    #[test]
    fn test_status_buckets_sum_to_total() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            let batches = test_utils::create_random_batches(&mut rng, 40);

            for window in [MealWindow::Lunch, MealWindow::Dinner] {
                let stats = aggregate(&batches, &[], &StatsQuery::new(window));
                let sum = stats.by_status.iter().map(|(_, count)| count).sum::<usize>();

                assert_eq!(sum, stats.by_status.total());

                let in_window = batches
                    .iter()
                    .filter(|batch| batch.meal_window == window && batch.status.is_known())
                    .count();
                assert_eq!(stats.by_status.total(), in_window);
            }
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let mut rng = SmallRng::seed_from_u64(11);
        let batches = test_utils::create_random_batches(&mut rng, 25);
        let query = StatsQuery::new(MealWindow::Lunch).with_performance(true);

        let first = serde_json::to_string(&aggregate(&batches, &[], &query)).unwrap();
        let second = serde_json::to_string(&aggregate(&batches, &[], &query)).unwrap();

        assert_eq!(first, second);
    }
}
