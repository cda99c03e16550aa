use fxhash::FxHashMap;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::time_field;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Latest known position and status of a driver. Never historical.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverSnapshot {
    pub driver_id: String,
    pub status: Option<String>,
    pub location: Option<GeoPoint>,
    pub updated_at: Option<String>,
}

impl DriverSnapshot {
    pub fn updated_at(&self) -> Option<Timestamp> {
        time_field::resolve(self.updated_at.as_deref())
    }
}

/// One snapshot per driver id, latest wins.
#[derive(Debug, Default, Clone)]
pub struct DriverRoster {
    snapshots: FxHashMap<String, DriverSnapshot>,
}

impl DriverRoster {
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = DriverSnapshot>) -> Self {
        let mut roster = DriverRoster::default();
        for snapshot in snapshots {
            roster.upsert(snapshot);
        }
        roster
    }

    /// Stores `snapshot` unless the roster already holds a strictly newer one
    /// for the same driver. A snapshot without a parsable `updatedAt` only
    /// replaces another undated snapshot.
    ///
    /// Returns whether the snapshot was stored.
    pub fn upsert(&mut self, snapshot: DriverSnapshot) -> bool {
        let replace = match self.snapshots.get(&snapshot.driver_id) {
            None => true,
            Some(current) => match (current.updated_at(), snapshot.updated_at()) {
                (Some(current), Some(incoming)) => incoming >= current,
                (None, _) => true,
                (Some(_), None) => false,
            },
        };

        if replace {
            self.snapshots.insert(snapshot.driver_id.clone(), snapshot);
        }

        replace
    }

    pub fn get(&self, driver_id: &str) -> Option<&DriverSnapshot> {
        self.snapshots.get(driver_id)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
