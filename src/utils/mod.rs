pub mod constants;
pub mod patch;
pub mod tracing;
