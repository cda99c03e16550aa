use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::record::{
    assignment::Assignment,
    batch::Batch,
    driver::{DriverRoster, DriverSnapshot},
    operating_hours::OperatingHours,
    order::Order,
};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to render one batch view.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchSnapshot {
    pub batch: Batch,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub drivers: Vec<DriverSnapshot>,
    pub operating_hours: Option<OperatingHours>,
}

impl BatchSnapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        parse_reader(reader)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        read_file(path.as_ref())
    }

    pub fn driver_roster(&self) -> DriverRoster {
        DriverRoster::from_snapshots(self.drivers.iter().cloned())
    }

    /// Latest snapshot of the driver assigned to the batch, if any.
    pub fn assigned_driver(&self) -> Option<DriverSnapshot> {
        let driver_id = self.batch.driver.as_ref()?.id.as_str();
        self.driver_roster().get(driver_id).cloned()
    }
}

/// All batches and orders of a kitchen, used for the dispatch overview.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KitchenSnapshot {
    #[serde(default)]
    pub batches: Vec<Batch>,
    #[serde(default)]
    pub orders: Vec<Order>,
    pub operating_hours: Option<OperatingHours>,
}

impl KitchenSnapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        parse_reader(reader)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        read_file(path.as_ref())
    }
}

fn parse_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, SnapshotError> {
    Ok(serde_json::from_reader(reader)?)
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    debug!(path = %path.display(), "Reading snapshot");
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}
