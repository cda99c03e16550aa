use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::display_band::DisplayBand;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Collecting,
    ReadyForDispatch,
    Dispatched,
    InProgress,
    Completed,
    PartialComplete,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BatchStatus {
    /// Every recognized status, in lifecycle order.
    pub const ALL: [BatchStatus; 7] = [
        BatchStatus::Collecting,
        BatchStatus::ReadyForDispatch,
        BatchStatus::Dispatched,
        BatchStatus::InProgress,
        BatchStatus::Completed,
        BatchStatus::PartialComplete,
        BatchStatus::Cancelled,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BatchStatus::Completed | BatchStatus::PartialComplete | BatchStatus::Cancelled
        )
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BatchStatus::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Collecting => "COLLECTING",
            BatchStatus::ReadyForDispatch => "READY_FOR_DISPATCH",
            BatchStatus::Dispatched => "DISPATCHED",
            BatchStatus::InProgress => "IN_PROGRESS",
            BatchStatus::Completed => "COMPLETED",
            BatchStatus::PartialComplete => "PARTIAL_COMPLETE",
            BatchStatus::Cancelled => "CANCELLED",
            BatchStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn band(&self) -> DisplayBand {
        match self {
            BatchStatus::Collecting => DisplayBand::new("Collecting", "#E3F2FD", "#1565C0"),
            BatchStatus::ReadyForDispatch => {
                DisplayBand::new("Ready for dispatch", "#FFF8E1", "#F57F17")
            }
            BatchStatus::Dispatched => DisplayBand::new("Dispatched", "#E8EAF6", "#283593"),
            BatchStatus::InProgress => DisplayBand::new("In progress", "#F3E5F5", "#6A1B9A"),
            BatchStatus::Completed => DisplayBand::new("Completed", "#E8F5E9", "#2E7D32"),
            BatchStatus::PartialComplete => {
                DisplayBand::new("Partially complete", "#FFF3E0", "#E65100")
            }
            BatchStatus::Cancelled => DisplayBand::new("Cancelled", "#FFEBEE", "#C62828"),
            BatchStatus::Unknown => DisplayBand::NEUTRAL,
        }
    }
}

impl Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Assigned,
    EnRoute,
    Arrived,
    Delivered,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssignmentStatus::Delivered | AssignmentStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Assigned => "ASSIGNED",
            AssignmentStatus::EnRoute => "EN_ROUTE",
            AssignmentStatus::Arrived => "ARRIVED",
            AssignmentStatus::Delivered => "DELIVERED",
            AssignmentStatus::Failed => "FAILED",
            AssignmentStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn band(&self) -> DisplayBand {
        match self {
            AssignmentStatus::Assigned => DisplayBand::new("Assigned", "#E3F2FD", "#1565C0"),
            AssignmentStatus::EnRoute => DisplayBand::new("En route", "#F3E5F5", "#6A1B9A"),
            AssignmentStatus::Arrived => DisplayBand::new("Arrived", "#FFF8E1", "#F57F17"),
            AssignmentStatus::Delivered => DisplayBand::new("Delivered", "#E8F5E9", "#2E7D32"),
            AssignmentStatus::Failed => DisplayBand::new("Failed", "#FFEBEE", "#C62828"),
            AssignmentStatus::Unknown => DisplayBand::NEUTRAL,
        }
    }
}

impl Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Accepted,
    Preparing,
    Ready,
    PickedUp,
    OutForDelivery,
    Delivered,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Orders in these states can still be pulled into a new batch.
    pub fn is_batchable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Accepted | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealWindow {
    Lunch,
    Dinner,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MealWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealWindow::Lunch => "LUNCH",
            MealWindow::Dinner => "DINNER",
            MealWindow::Unknown => "UNKNOWN",
        }
    }
}

impl Display for MealWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LUNCH" => Ok(MealWindow::Lunch),
            "DINNER" => Ok(MealWindow::Dinner),
            other => Err(format!("Unknown meal window {other}")),
        }
    }
}
