use jiff::{SignedDuration, tz::TimeZone};

#[derive(Clone, Debug)]
pub struct EngineParams {
    /// Zone in which instants are rendered on a wall clock.
    pub time_zone: TimeZone,
    /// A driver snapshot older than this is considered stale.
    pub stale_driver_after: SignedDuration,
    /// How often an open batch view is expected to refresh.
    pub refresh_interval: SignedDuration,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            time_zone: TimeZone::UTC,
            stale_driver_after: SignedDuration::from_mins(2),
            refresh_interval: SignedDuration::from_secs(12),
        }
    }
}
