use courier_engine::{dispatch_window::clock_time::ClockTime, record::status::MealWindow};
use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// A duration that is strictly positive, for polling loops.
pub fn parse_interval(input: &str) -> Result<jiff::SignedDuration, String> {
    let duration = parse_duration(input)?;
    if duration <= jiff::SignedDuration::ZERO {
        return Err(String::from("Interval must be greater than zero"));
    }

    Ok(duration)
}

pub fn parse_clock_time(input: &str) -> Result<ClockTime, String> {
    input.parse::<ClockTime>().map_err(|err| err.to_string())
}

pub fn parse_meal_window(input: &str) -> Result<MealWindow, String> {
    input.parse::<MealWindow>()
}
