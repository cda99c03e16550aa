use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::time_field;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
    #[error("Empty time string")]
    Empty,
    #[error("Expected HH:MM, got {0:?}")]
    MissingSeparator(String),
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
    #[error("Time {hour}:{minute} is out of range")]
    OutOfRange { hour: u32, minute: u32 },
}

/// A time of day with minute precision, as configured in operating hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ClockTimeError::OutOfRange { hour, minute });
        }

        Ok(ClockTime {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// `2:00 PM`, `12:30 AM`.
    pub fn to_twelve_hour(&self) -> String {
        time_field::twelve_hour_clock(self.hour, self.minute)
    }
}

impl From<jiff::civil::Time> for ClockTime {
    fn from(time: jiff::civil::Time) -> Self {
        ClockTime {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl From<ClockTime> for jiff::civil::Time {
    fn from(clock: ClockTime) -> Self {
        jiff::civil::time(clock.hour as i8, clock.minute as i8, 0, 0)
    }
}

fn parse_component(value: &str) -> Result<u32, ClockTimeError> {
    let value = value.trim();
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockTimeError::InvalidNumber(value.to_owned()));
    }

    value
        .parse::<u32>()
        .map_err(|_| ClockTimeError::InvalidNumber(value.to_owned()))
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Accepts `H:M`, `HH:MM` and `HH:MM:SS` (seconds are ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ClockTimeError::Empty);
        }

        let mut parts = s.split(':');
        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return Err(ClockTimeError::MissingSeparator(s.to_owned()));
        };

        let hour = parse_component(hour)?;
        let minute = parse_component(minute)?;

        if let Some(second) = parts.next() {
            parse_component(second)?;
        }
        if parts.next().is_some() {
            return Err(ClockTimeError::MissingSeparator(s.to_owned()));
        }

        ClockTime::new(hour, minute)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("14:00".parse(), ClockTime::new(14, 0));
        assert_eq!("9:05".parse(), ClockTime::new(9, 5));
        assert_eq!("9:5".parse(), ClockTime::new(9, 5));
        assert_eq!("07:30:00".parse(), ClockTime::new(7, 30));
        assert_eq!(" 23:59 ".parse(), ClockTime::new(23, 59));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ClockTime>(), Err(ClockTimeError::Empty));
        assert_eq!(
            "1400".parse::<ClockTime>(),
            Err(ClockTimeError::MissingSeparator(String::from("1400")))
        );
        assert_eq!(
            "ab:00".parse::<ClockTime>(),
            Err(ClockTimeError::InvalidNumber(String::from("ab")))
        );
        assert_eq!(
            "-1:00".parse::<ClockTime>(),
            Err(ClockTimeError::InvalidNumber(String::from("-1")))
        );
        assert_eq!(
            "24:00".parse::<ClockTime>(),
            Err(ClockTimeError::OutOfRange {
                hour: 24,
                minute: 0
            })
        );
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("12:00:00:00".parse::<ClockTime>().is_err());
        assert!("123:00".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_minute_of_day() {
        let time = ClockTime::new(14, 30).unwrap();
        assert_eq!(time.minute_of_day(), 870);
        assert_eq!(ClockTime::new(0, 0).unwrap().minute_of_day(), 0);
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(ClockTime::new(0, 0).unwrap().to_twelve_hour(), "12:00 AM");
        assert_eq!(ClockTime::new(12, 0).unwrap().to_twelve_hour(), "12:00 PM");
        assert_eq!(ClockTime::new(14, 0).unwrap().to_twelve_hour(), "2:00 PM");
        assert_eq!(ClockTime::new(21, 45).unwrap().to_twelve_hour(), "9:45 PM");
    }

    #[test]
    fn test_from_civil_time() {
        let time: ClockTime = jiff::civil::time(13, 59, 42, 0).into();
        assert_eq!(time, ClockTime::new(13, 59).unwrap());
        assert_eq!(time.to_string(), "13:59");
    }

    #[test]
    fn test_into_civil_time() {
        let time: jiff::civil::Time = ClockTime::new(7, 5).unwrap().into();
        assert_eq!(time, jiff::civil::time(7, 5, 0, 0));
    }
}
