use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    record::status::{BatchStatus, MealWindow},
    time_field,
};

/// Reference to another upstream entity, such as a kitchen or a zone.
///
/// Upstream sends either the bare id or the populated document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", from = "NamedRefRepr")]
pub struct NamedRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: Option<String>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
enum NamedRefRepr {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        name: Option<String>,
    },
}

impl From<NamedRefRepr> for NamedRef {
    fn from(repr: NamedRefRepr) -> Self {
        match repr {
            NamedRefRepr::Id(id) => NamedRef { id, name: None },
            NamedRefRepr::Populated { id, name } => NamedRef { id, name },
        }
    }
}

/// The driver of a batch, either a bare id or the populated driver.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", from = "DriverRefRepr")]
pub struct DriverRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
enum DriverRefRepr {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        name: Option<String>,
        phone: Option<String>,
    },
}

impl From<DriverRefRepr> for DriverRef {
    fn from(repr: DriverRefRepr) -> Self {
        match repr {
            DriverRefRepr::Id(id) => DriverRef {
                id,
                ..DriverRef::default()
            },
            DriverRefRepr::Populated { id, name, phone } => DriverRef { id, name, phone },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStrategy {
    pub mode: Option<String>,
    /// Fit score computed by the assignment engine, higher is better.
    pub assigned_score: Option<f64>,
    pub manual_assignment_reason: Option<String>,
    #[serde(default)]
    pub broadcast_driver_ids: Vec<String>,
}

impl AssignmentStrategy {
    /// The mode as a readable phrase, `AUTO_ASSIGN` becomes `AUTO ASSIGN`.
    pub fn mode_label(&self) -> Option<String> {
        self.mode
            .as_deref()
            .filter(|mode| !mode.is_empty())
            .map(|mode| mode.replace('_', " "))
    }
}

/// Output of the upstream route optimizer. Present once optimization has run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimization {
    pub algorithm: Option<String>,
    /// Meters
    #[serde(alias = "totalDistance")]
    pub total_distance_meters: Option<f64>,
    /// Seconds
    #[serde(alias = "totalDuration")]
    pub total_duration_seconds: Option<f64>,
    pub improvement_percent: Option<f64>,
    pub optimized_at: Option<String>,
}

impl RouteOptimization {
    pub fn optimized_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.optimized_at.as_deref())
    }

    pub fn total_distance_km(&self) -> Option<f64> {
        self.total_distance_meters.map(|meters| meters / 1000.0)
    }
}

/// Explicit `null`s on status, window, order ids and counters read as their
/// defaults.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub batch_number: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: BatchStatus,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub meal_window: MealWindow,
    #[serde(alias = "kitchenId")]
    pub kitchen: Option<NamedRef>,
    #[serde(alias = "zoneId")]
    pub zone: Option<NamedRef>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub order_ids: Vec<String>,
    #[serde(alias = "driverId")]
    pub driver: Option<DriverRef>,

    pub created_at: Option<String>,
    pub dispatched_at: Option<String>,
    pub driver_assigned_at: Option<String>,
    pub picked_up_at: Option<String>,
    pub completed_at: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub total_delivered: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub total_failed: u32,

    pub assignment_strategy: Option<AssignmentStrategy>,
    pub route_optimization: Option<RouteOptimization>,
}

impl Batch {
    pub fn created_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.created_at.as_deref())
    }

    pub fn optimized_at(&self) -> Option<Timestamp> {
        self.route_optimization
            .as_ref()
            .and_then(RouteOptimization::optimized_at)
    }

    pub fn dispatched_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.dispatched_at.as_deref())
    }

    pub fn driver_assigned_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.driver_assigned_at.as_deref())
    }

    pub fn picked_up_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.picked_up_at.as_deref())
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.completed_at.as_deref())
    }

    pub fn kitchen_id(&self) -> Option<&str> {
        self.kitchen.as_ref().map(|kitchen| kitchen.id.as_str())
    }

    pub fn kitchen_name(&self) -> Option<&str> {
        self.kitchen.as_ref().and_then(|kitchen| kitchen.name.as_deref())
    }

    pub fn assigned_score(&self) -> Option<f64> {
        self.assignment_strategy
            .as_ref()
            .and_then(|strategy| strategy.assigned_score)
    }

    /// Human-readable identifier, falling back to the tail of the id.
    pub fn label(&self) -> String {
        match self.batch_number.as_deref() {
            Some(number) if !number.is_empty() => number.to_owned(),
            _ => crate::utils::short_id(&self.id, 6).to_owned(),
        }
    }
}
