use serde::Serialize;

use crate::record::batch::Batch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgress {
    pub delivered: usize,
    pub failed: usize,
    pub remaining: usize,
    pub total: usize,
    /// Share of orders with an outcome, rounded percent.
    pub percent: u32,
}

impl BatchProgress {
    /// Reads the batch counters, clamped so that `delivered + failed` never
    /// exceeds the number of orders.
    pub fn of(batch: &Batch) -> Self {
        let total = batch.order_ids.len();
        let delivered = (batch.total_delivered as usize).min(total);
        let failed = (batch.total_failed as usize).min(total - delivered);
        let done = delivered + failed;

        let percent = if total == 0 {
            0
        } else {
            (done as f64 / total as f64 * 100.0).round() as u32
        };

        BatchProgress {
            delivered,
            failed,
            remaining: total - done,
            total,
            percent,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.remaining == 0
    }
}
