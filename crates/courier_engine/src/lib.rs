pub mod dispatch_window;
pub mod display_band;
pub mod driver_freshness;
pub mod eta;
pub mod inspect;
pub mod json;
pub mod params;
pub mod progress;
pub mod record;
pub mod route_summary;
pub mod stats;
pub mod stops;
pub mod time_field;
pub mod timeline;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
