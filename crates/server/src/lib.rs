pub mod api;
pub mod metrics;
pub mod reporting;
pub mod state;
