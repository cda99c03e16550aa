pub mod assignment;
pub mod batch;
pub mod driver;
pub mod operating_hours;
pub mod order;
pub mod status;
