use serde::Serialize;

use crate::{dispatch_window::calculator::NOT_AVAILABLE, record::batch::RouteOptimization};

/// Display strings for the route metadata produced by the upstream optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub algorithm: String,
    pub distance: String,
    pub duration: String,
    pub improvement: String,
}

fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round().max(0.0) as u64;
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes} min")
    }
}

impl RouteSummary {
    pub fn of(route: Option<&RouteOptimization>) -> Self {
        let algorithm = route
            .and_then(|route| route.algorithm.as_deref())
            .filter(|algorithm| !algorithm.is_empty())
            .map(|algorithm| algorithm.replace('_', " "));
        let distance = route
            .and_then(RouteOptimization::total_distance_km)
            .map(|km| format!("{km:.1} km"));
        let duration = route
            .and_then(|route| route.total_duration_seconds)
            .map(format_duration);
        let improvement = route
            .and_then(|route| route.improvement_percent)
            .map(|percent| format!("{percent:.0}%"));

        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_owned());

        RouteSummary {
            algorithm: or_na(algorithm),
            distance: or_na(distance),
            duration: or_na(duration),
            improvement: or_na(improvement),
        }
    }
}
