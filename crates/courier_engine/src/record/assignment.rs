use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::{record::status::AssignmentStatus, time_field};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopSequence {
    pub sequence_number: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtaTracking {
    #[serde(alias = "eta")]
    pub eta_seconds: Option<f64>,
    /// Meters
    #[serde(alias = "distanceRemaining")]
    pub distance_remaining_meters: Option<f64>,
    /// Upstream category, one of `EARLY`, `ON_TIME`, `LATE`, `CRITICAL`.
    /// Kept raw, see [`crate::eta::classify`].
    pub eta_status: Option<String>,
}

/// Links one order to its delivery outcome within a batch.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub order_id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: AssignmentStatus,
    pub delivered_at: Option<String>,
    pub failed_at: Option<String>,
    pub failure_reason: Option<String>,
    pub sequence: Option<StopSequence>,
    pub eta_tracking: Option<EtaTracking>,
}

impl Assignment {
    pub fn delivered_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.delivered_at.as_deref())
    }

    pub fn failed_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.failed_at.as_deref())
    }

    /// Whether the assignment carries a delivered or failed timestamp.
    pub fn has_outcome(&self) -> bool {
        self.delivered_at().is_some() || self.failed_at().is_some()
    }

    pub fn sequence_number(&self) -> Option<u32> {
        self.sequence
            .as_ref()
            .and_then(|sequence| sequence.sequence_number)
    }

    pub fn eta_status(&self) -> Option<&str> {
        self.eta_tracking
            .as_ref()
            .and_then(|tracking| tracking.eta_status.as_deref())
    }
}
