use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{dispatch_window::clock_time::ClockTime, record::status::MealWindow};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealWindowHours {
    /// `HH:MM`, 24-hour clock.
    pub start_time: Option<String>,
    /// `HH:MM`, 24-hour clock. Batches of the window may be dispatched from
    /// this time on.
    pub end_time: Option<String>,
}

/// Per-kitchen operating hours.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub lunch: Option<MealWindowHours>,
    pub dinner: Option<MealWindowHours>,
}

impl OperatingHours {
    pub fn window(&self, window: MealWindow) -> Option<&MealWindowHours> {
        match window {
            MealWindow::Lunch => self.lunch.as_ref(),
            MealWindow::Dinner => self.dinner.as_ref(),
            MealWindow::Unknown => None,
        }
    }

    /// The dispatch cutoff of `window`. A malformed end time counts as
    /// missing.
    pub fn end_time(&self, window: MealWindow) -> Option<ClockTime> {
        let raw = self.window(window)?.end_time.as_deref()?;

        match raw.parse::<ClockTime>() {
            Ok(time) => Some(time),
            Err(err) => {
                debug!(%window, raw, %err, "Ignoring malformed end time");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_time() {
        let hours: OperatingHours = serde_json::from_str(
            r#"{ "lunch": { "endTime": "14:00" }, "dinner": { "endTime": "7:5" } }"#,
        )
        .unwrap();

        assert_eq!(hours.end_time(MealWindow::Lunch), ClockTime::new(14, 0).ok());
        assert_eq!(hours.end_time(MealWindow::Dinner), ClockTime::new(7, 5).ok());
        assert_eq!(hours.end_time(MealWindow::Unknown), None);
    }

    #[test]
    fn test_malformed_end_time_is_missing() {
        let hours = OperatingHours {
            lunch: Some(MealWindowHours {
                start_time: None,
                end_time: Some(String::from("2pm")),
            }),
            dinner: None,
        };

        assert_eq!(hours.end_time(MealWindow::Lunch), None);
        assert_eq!(hours.end_time(MealWindow::Dinner), None);
    }
}
