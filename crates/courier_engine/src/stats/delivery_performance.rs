use serde::Serialize;

use crate::{record::batch::Batch, utils};

/// Percentage of successful deliveries, rounded to the nearest whole number.
/// Zero when nothing was attempted.
pub fn success_rate(total: usize, successful: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    (successful as f64 / total as f64 * 100.0).round() as u32
}

/// Delivery KPIs over a set of batches. Only computed for viewers holding an
/// authority role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPerformance {
    pub total_orders: usize,
    pub successful_deliveries: usize,
    pub failed_deliveries: usize,
    /// Percent, 0..=100
    pub success_rate: u32,
    /// One decimal place.
    pub average_deliveries_per_batch: f64,
}

impl DeliveryPerformance {
    pub fn from_batches<'a>(batches: impl IntoIterator<Item = &'a Batch>) -> Self {
        let mut batch_count = 0;
        let mut total_orders = 0;
        let mut successful_deliveries = 0;
        let mut failed_deliveries = 0;

        for batch in batches {
            batch_count += 1;
            total_orders += batch.order_ids.len();
            successful_deliveries += batch.total_delivered as usize;
            failed_deliveries += batch.total_failed as usize;
        }

        let average_deliveries_per_batch = if batch_count == 0 {
            0.0
        } else {
            utils::round_one_decimal(successful_deliveries as f64 / batch_count as f64)
        };

        DeliveryPerformance {
            total_orders,
            successful_deliveries,
            failed_deliveries,
            success_rate: success_rate(total_orders, successful_deliveries),
            average_deliveries_per_batch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::status::{BatchStatus, MealWindow},
        test_utils,
    };

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(0, 0), 0);
        assert_eq!(success_rate(10, 10), 100);
        assert_eq!(success_rate(3, 1), 33);
        assert_eq!(success_rate(3, 2), 67);
        assert_eq!(success_rate(8, 1), 13);
    }

    #[test]
    fn test_from_batches() {
        let mut first = test_utils::create_batch("b1", BatchStatus::Completed, MealWindow::Lunch);
        first.order_ids = (0..4).map(|i| format!("o{i}")).collect();
        first.total_delivered = 3;
        first.total_failed = 1;

        let mut second =
            test_utils::create_batch("b2", BatchStatus::PartialComplete, MealWindow::Lunch);
        second.order_ids = (0..4).map(|i| format!("p{i}")).collect();
        second.total_delivered = 2;
        second.total_failed = 2;

        let performance = DeliveryPerformance::from_batches([&first, &second]);

        assert_eq!(performance.total_orders, 8);
        assert_eq!(performance.successful_deliveries, 5);
        assert_eq!(performance.failed_deliveries, 3);
        assert_eq!(performance.success_rate, 63);
        assert_eq!(performance.average_deliveries_per_batch, 2.5);
    }

    #[test]
    fn test_empty_batches() {
        let batches: Vec<Batch> = Vec::new();
        let performance = DeliveryPerformance::from_batches(&batches);

        assert_eq!(performance.total_orders, 0);
        assert_eq!(performance.success_rate, 0);
        assert_eq!(performance.average_deliveries_per_batch, 0.0);
    }
}
