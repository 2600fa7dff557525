//! Configuration loading and validation
//!
//! This module handles discovery and parsing of cmdln.yml files
//! and validation of their contents.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
