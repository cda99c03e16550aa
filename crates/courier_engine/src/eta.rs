use serde::Serialize;
use tracing::debug;

use crate::display_band::DisplayBand;

/// Health of a single stop relative to its promised delivery time, as
/// categorized upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EtaStatus {
    Early,
    OnTime,
    Late,
    Critical,
    Unknown,
}

impl EtaStatus {
    pub const KNOWN: [EtaStatus; 4] = [
        EtaStatus::Early,
        EtaStatus::OnTime,
        EtaStatus::Late,
        EtaStatus::Critical,
    ];

    pub fn from_raw(raw: Option<&str>) -> EtaStatus {
        match raw {
            Some("EARLY") => EtaStatus::Early,
            Some("ON_TIME") => EtaStatus::OnTime,
            Some("LATE") => EtaStatus::Late,
            Some("CRITICAL") => EtaStatus::Critical,
            Some(other) => {
                debug!(eta_status = other, "Unrecognized ETA status");
                EtaStatus::Unknown
            }
            None => EtaStatus::Unknown,
        }
    }

    pub fn band(&self) -> DisplayBand {
        match self {
            EtaStatus::Early => DisplayBand::new("Early", "#E3F2FD", "#1565C0"),
            EtaStatus::OnTime => DisplayBand::new("On time", "#E8F5E9", "#2E7D32"),
            EtaStatus::Late => DisplayBand::new("Late", "#FFF3E0", "#E65100"),
            EtaStatus::Critical => DisplayBand::new("Critical", "#FFEBEE", "#C62828"),
            EtaStatus::Unknown => DisplayBand::NEUTRAL,
        }
    }
}

/// Maps an upstream ETA status to its display band. Anything unrecognized,
/// including an empty or missing value, gets the neutral band.
pub fn classify(eta_status: Option<&str>) -> DisplayBand {
    EtaStatus::from_raw(eta_status).band()
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;

    #[test]
    fn test_known_statuses_have_distinct_bands() {
        let bands = ["EARLY", "ON_TIME", "LATE", "CRITICAL"]
            .into_iter()
            .map(|raw| classify(Some(raw)))
            .collect::<Vec<_>>();

        let unique = bands.iter().collect::<FxHashSet<_>>();
        assert_eq!(unique.len(), 4);
        assert!(bands.iter().all(|band| !band.is_neutral()));
    }

    #[test]
    fn test_classification_is_fixed() {
        for status in EtaStatus::KNOWN {
            assert_eq!(status.band(), status.band());
        }
        assert_eq!(classify(Some("LATE")).label, "Late");
        assert_eq!(classify(Some("CRITICAL")).background, "#FFEBEE");
    }

    #[test]
    fn test_unknown_statuses_are_neutral() {
        assert_eq!(classify(None), DisplayBand::NEUTRAL);
        assert_eq!(classify(Some("")), DisplayBand::NEUTRAL);
        assert_eq!(classify(Some("late")), DisplayBand::NEUTRAL);
        assert_eq!(classify(Some("VERY_LATE")), DisplayBand::NEUTRAL);
    }
}
