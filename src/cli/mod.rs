//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, input collection, rendering
//! and shell completion.

pub mod app;
pub mod output;

// Re-export main types
pub use app::*;
pub use output::*;
