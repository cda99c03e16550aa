pub mod calculator;
pub mod clock_time;
