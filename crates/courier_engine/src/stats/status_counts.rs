use fxhash::FxHashMap;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::record::status::BatchStatus;

/// Number of batches per recognized status, plus their total.
///
/// Batches with an unrecognized status are kept out of both the buckets and
/// the total and reported separately, so the seven buckets always sum to
/// `total`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    #[serde_as(as = "FxHashMap<DisplayFromStr, _>")]
    counts: FxHashMap<BatchStatus, usize>,
    total: usize,
    unrecognized: usize,
}

impl StatusCounts {
    /// Builds the counts in a single pass over `statuses`.
    pub fn from_statuses(statuses: impl IntoIterator<Item = BatchStatus>) -> Self {
        let mut counts = FxHashMap::default();
        for status in BatchStatus::ALL {
            counts.insert(status, 0);
        }

        let mut total = 0;
        let mut unrecognized = 0;

        for status in statuses {
            if status.is_known() {
                counts
                    .entry(status)
                    .and_modify(|entry| *entry += 1)
                    .or_insert(1);
                total += 1;
            } else {
                unrecognized += 1;
            }
        }

        StatusCounts {
            counts,
            total,
            unrecognized,
        }
    }

    pub fn get(&self, status: BatchStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// The seven buckets in lifecycle order.
    pub fn iter(&self) -> impl Iterator<Item = (BatchStatus, usize)> + '_ {
        BatchStatus::ALL
            .into_iter()
            .map(|status| (status, self.get(status)))
    }
}
