pub mod batch_stats;
pub mod delivery_performance;
pub mod status_counts;
