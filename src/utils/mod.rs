//! Utility functions

pub mod time;

pub use time::format_milliseconds;
