use anyhow::Context;
use courier_engine::params::EngineParams;
use jiff::tz::TimeZone;

use crate::parsers;

const TIMEZONE_ENV_VAR: &str = "COURIER_TIMEZONE";
const REFRESH_INTERVAL_ENV_VAR: &str = "COURIER_REFRESH_INTERVAL";
const STALE_DRIVER_AFTER_ENV_VAR: &str = "COURIER_STALE_DRIVER_AFTER";

/// Raw settings gathered from the environment and the command line, in that
/// order of precedence (flags win).
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub timezone: Option<String>,
    pub refresh_interval: Option<String>,
    pub stale_driver_after: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            timezone: std::env::var(TIMEZONE_ENV_VAR).ok(),
            refresh_interval: std::env::var(REFRESH_INTERVAL_ENV_VAR).ok(),
            stale_driver_after: std::env::var(STALE_DRIVER_AFTER_ENV_VAR).ok(),
        }
    }

    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        if timezone.is_some() {
            self.timezone = timezone;
        }
        self
    }

    pub fn into_params(self) -> Result<EngineParams, anyhow::Error> {
        let mut params = EngineParams::default();

        if let Some(name) = self.timezone.filter(|name| !name.is_empty()) {
            params.time_zone =
                TimeZone::get(&name).with_context(|| format!("Unknown time zone {name}"))?;
        }

        if let Some(raw) = self.refresh_interval {
            params.refresh_interval = parsers::parse_interval(&raw)
                .map_err(|err| anyhow::anyhow!("{REFRESH_INTERVAL_ENV_VAR}={raw}: {err}"))?;
        }

        if let Some(raw) = self.stale_driver_after {
            params.stale_driver_after = parsers::parse_duration(&raw)
                .map_err(|err| anyhow::anyhow!("{STALE_DRIVER_AFTER_ENV_VAR}={raw}: {err}"))?;
        }

        Ok(params)
    }
}
