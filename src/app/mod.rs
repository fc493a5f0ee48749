//! Interactive front end.
//!
//! This module provides the console menu loop, the pure rendering helpers it
//! prints with, and the exit statistics.

pub mod console;
pub mod render;
pub mod statistics;

// Re-export public API
pub use console::run_console;
pub use statistics::print_error_statistics;
