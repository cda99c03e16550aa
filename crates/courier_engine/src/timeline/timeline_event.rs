use std::fmt::Display;

use jiff::{Timestamp, tz::TimeZone};
use serde::Serialize;

use crate::time_field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineCategory {
    Created,
    RouteOptimized,
    Dispatched,
    DriverAssigned,
    PickedUp,
    Delivered,
    Failed,
    Completed,
    Pending,
}

impl TimelineCategory {
    /// Icon key understood by the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            TimelineCategory::Created => "add-circle",
            TimelineCategory::RouteOptimized => "map",
            TimelineCategory::Dispatched => "send",
            TimelineCategory::DriverAssigned => "person",
            TimelineCategory::PickedUp => "bag-check",
            TimelineCategory::Delivered => "checkmark-circle",
            TimelineCategory::Failed => "close-circle",
            TimelineCategory::Completed => "flag",
            TimelineCategory::Pending => "time",
        }
    }
}

impl Display for TimelineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimelineCategory::Created => "CREATED",
            TimelineCategory::RouteOptimized => "ROUTE_OPTIMIZED",
            TimelineCategory::Dispatched => "DISPATCHED",
            TimelineCategory::DriverAssigned => "DRIVER_ASSIGNED",
            TimelineCategory::PickedUp => "PICKED_UP",
            TimelineCategory::Delivered => "DELIVERED",
            TimelineCategory::Failed => "FAILED",
            TimelineCategory::Completed => "COMPLETED",
            TimelineCategory::Pending => "PENDING",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    time: Option<Timestamp>,
    category: TimelineCategory,
    icon: &'static str,
    title: String,
    subtitle: Option<String>,
}

impl TimelineEvent {
    pub fn new(
        time: Option<Timestamp>,
        category: TimelineCategory,
        title: impl Into<String>,
        subtitle: Option<String>,
    ) -> Self {
        TimelineEvent {
            time,
            category,
            icon: category.icon(),
            title: title.into(),
            subtitle,
        }
    }

    pub fn time(&self) -> Option<Timestamp> {
        self.time
    }

    pub fn category(&self) -> TimelineCategory {
        self.category
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// `h:mm AM/PM` in `tz`, or `----` for undated events.
    pub fn display_time(&self, tz: &TimeZone) -> String {
        time_field::display_time(self.time, tz)
    }
}
