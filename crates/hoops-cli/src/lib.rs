//! CLI library components for the hoops feature builder.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
