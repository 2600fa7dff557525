//! Rendering and diagnostics
//!
//! Parsed commands go to stdout; diagnostics go to stderr, filtered by verbosity.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::parser::ParsedCommand;
use colored::Colorize;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

/// Verbosity-gated printer for stderr diagnostics
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub verbosity: Verbosity,
}

impl Printer {
    pub fn new(verbosity: Verbosity) -> Self {
        Printer { verbosity }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("[INFO] {}", message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }
}

/// Render parsed commands in the given format
pub fn render(commands: &[ParsedCommand], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(commands)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(commands)?),
    }
}

fn render_text(commands: &[ParsedCommand]) -> String {
    let mut out = String::new();
    for cmd in commands {
        push_line(&mut out, "action:", &cmd.action);
        push_line(&mut out, "args:", &cmd.args.join(" "));
    }
    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    let line = format!("{} {}", label.bold(), value);
    out.push_str(line.trim_end());
    out.push('\n');
}
