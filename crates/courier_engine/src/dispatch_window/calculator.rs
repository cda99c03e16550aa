//! Dispatch eligibility of a meal window against its configured cutoff.
//!
//! The cutoff is compared by minute of day only. A window whose cutoff lies
//! past midnight is not supported: an end time is always a cutoff on the
//! same day as `now`.

use jiff::civil::Time;
use serde::Serialize;

use crate::{
    dispatch_window::clock_time::ClockTime,
    record::{operating_hours::OperatingHours, status::MealWindow},
};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NOW: &str = "Now";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchWindowStatus {
    pub meal_window: MealWindow,
    /// The cutoff has been reached.
    pub eligible: bool,
    /// The caller asked to dispatch regardless of the cutoff.
    pub forced: bool,
    pub time_remaining: String,
    pub formatted_cutoff: String,
}

fn cutoff(window: MealWindow, hours: Option<&OperatingHours>) -> Option<ClockTime> {
    hours?.end_time(window)
}

fn is_past(cutoff: ClockTime, now: Time) -> bool {
    ClockTime::from(now).minute_of_day() >= cutoff.minute_of_day()
}

/// True once `now` has reached the cutoff minute of `window`. Without a
/// configured cutoff the window is never dispatchable.
pub fn can_dispatch(window: MealWindow, hours: Option<&OperatingHours>, now: Time) -> bool {
    cutoff(window, hours).is_some_and(|cutoff| is_past(cutoff, now))
}

/// `Now`, `N/A`, or the whole minutes left as `1h 5m` / `45m`.
pub fn time_until_dispatch(
    window: MealWindow,
    hours: Option<&OperatingHours>,
    now: Time,
) -> String {
    let Some(cutoff) = cutoff(window, hours) else {
        return NOT_AVAILABLE.to_owned();
    };

    if is_past(cutoff, now) {
        return NOW.to_owned();
    }

    let remaining = cutoff
        .minute_of_day()
        .saturating_sub(ClockTime::from(now).minute_of_day());
    let whole_hours = remaining / 60;
    let minutes = remaining % 60;

    if whole_hours > 0 {
        format!("{whole_hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// The cutoff on a 12-hour clock, `2:00 PM`, or `N/A`.
pub fn formatted_end_time(window: MealWindow, hours: Option<&OperatingHours>) -> String {
    cutoff(window, hours)
        .map(|cutoff| cutoff.to_twelve_hour())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Evaluates every view of the window at once. `force` is carried through
/// untouched; callers decide how it combines with `eligible`.
pub fn evaluate(
    window: MealWindow,
    hours: Option<&OperatingHours>,
    now: Time,
    force: bool,
) -> DispatchWindowStatus {
    DispatchWindowStatus {
        meal_window: window,
        eligible: can_dispatch(window, hours, now),
        forced: force,
        time_remaining: time_until_dispatch(window, hours, now),
        formatted_cutoff: formatted_end_time(window, hours),
    }
}
