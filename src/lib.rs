//! cmdln - split command strings into an action and its arguments
//!
//! The first whitespace-delimited token of a command string is its action;
//! the remaining tokens are its arguments, in order.
//!
//! ```
//! use cmdln::CmdParser;
//!
//! let mut parser = CmdParser::new("deploy --env prod");
//! parser.parse();
//! assert_eq!(parser.action(), "deploy");
//! assert_eq!(parser.args(), ["--env", "prod"]);
//! ```

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{CmdlnError, Result};
pub use parser::{CmdParser, ParsedCommand};

/// Current version of cmdln
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
