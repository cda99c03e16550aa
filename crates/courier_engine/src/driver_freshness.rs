use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::{params::EngineParams, record::driver::DriverSnapshot, time_field::TIME_PLACEHOLDER};

/// How recent the last known driver position is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverFreshness {
    pub last_seen: String,
    pub stale: bool,
}

fn format_age(age: SignedDuration) -> String {
    let minutes = age.as_mins();
    if minutes < 1 {
        String::from("just now")
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 24 * 60 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (24 * 60))
    }
}

impl DriverFreshness {
    /// Snapshots without a usable `updatedAt` are always stale. Timestamps
    /// ahead of `now` read as "just now".
    pub fn of(snapshot: &DriverSnapshot, now: Timestamp, params: &EngineParams) -> Self {
        let Some(updated_at) = snapshot.updated_at() else {
            return DriverFreshness {
                last_seen: TIME_PLACEHOLDER.to_owned(),
                stale: true,
            };
        };

        let age = now.duration_since(updated_at).max(SignedDuration::ZERO);

        DriverFreshness {
            last_seen: format_age(age),
            stale: age > params.stale_driver_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(updated_at: Option<&str>) -> DriverSnapshot {
        DriverSnapshot {
            driver_id: String::from("d1"),
            updated_at: updated_at.map(str::to_owned),
            ..DriverSnapshot::default()
        }
    }

    fn now() -> Timestamp {
        "2024-01-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_fresh_driver() {
        let freshness = DriverFreshness::of(
            &snapshot(Some("2024-01-01T11:59:30Z")),
            now(),
            &EngineParams::default(),
        );

        assert_eq!(freshness.last_seen, "just now");
        assert!(!freshness.stale);
    }

    #[test]
    fn test_stale_driver() {
        let freshness = DriverFreshness::of(
            &snapshot(Some("2024-01-01T11:57:00Z")),
            now(),
            &EngineParams::default(),
        );

        assert_eq!(freshness.last_seen, "3m ago");
        assert!(freshness.stale);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let freshness = DriverFreshness::of(
            &snapshot(Some("2024-01-01T11:58:00Z")),
            now(),
            &EngineParams::default(),
        );

        assert_eq!(freshness.last_seen, "2m ago");
        assert!(!freshness.stale);
    }

    #[test]
    fn test_hours_and_days() {
        let params = EngineParams::default();

        let hours = DriverFreshness::of(&snapshot(Some("2024-01-01T09:30:00Z")), now(), &params);
        let days = DriverFreshness::of(&snapshot(Some("2023-12-29T12:00:00Z")), now(), &params);

        assert_eq!(hours.last_seen, "2h ago");
        assert_eq!(days.last_seen, "3d ago");
    }

    #[test]
    fn test_future_update() {
        let freshness = DriverFreshness::of(
            &snapshot(Some("2024-01-01T12:05:00Z")),
            now(),
            &EngineParams::default(),
        );

        assert_eq!(freshness.last_seen, "just now");
        assert!(!freshness.stale);
    }

    #[test]
    fn test_missing_update() {
        let params = EngineParams::default();

        for raw in [None, Some("garbage")] {
            let freshness = DriverFreshness::of(&snapshot(raw), now(), &params);
            assert_eq!(freshness.last_seen, TIME_PLACEHOLDER);
            assert!(freshness.stale);
        }
    }
}
