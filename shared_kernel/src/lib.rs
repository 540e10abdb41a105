pub mod configuration;
pub mod date_time;
pub mod ids;
mod non_empty_string;
pub mod tracing;
