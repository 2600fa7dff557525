//! Main CLI application

use crate::cli::output::{render, Printer, Verbosity};
use crate::config::{load_config, Config, OutputFormat};
use crate::parser::{CmdParser, ParsedCommand};
use anyhow::Context as _;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("cmdln")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split command strings into an action and its arguments")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to cmdln.yml config file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .value_parser(value_parser!(OutputFormat))
                .help("Output format (overrides the config file)"),
        )
        .arg(
            Arg::new("no-alias")
                .long("no-alias")
                .help("Do not apply configured action aliases")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print parsed commands and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script and exit"),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(1..)
                .trailing_var_arg(true)
                .help("Command to parse; read from stdin lines when omitted"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Command words given on the command line, joined into one command string
fn command_from_args(matches: &ArgMatches) -> Option<String> {
    let words: Vec<&str> = matches
        .get_many::<String>("command")?
        .map(String::as_str)
        .collect();
    Some(words.join(" "))
}

/// Read one command per non-blank line
pub fn read_commands<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

/// Tokenize a command string and resolve its action alias
pub fn parse_command(input: &str, config: &Config, use_aliases: bool) -> ParsedCommand {
    let mut parser = CmdParser::new(input);
    parser.parse();

    let parsed = parser.parsed();
    if !use_aliases {
        return parsed;
    }

    let action = config.resolve_alias(parser.action()).to_string();
    parsed.with_action(action)
}

/// Run with already-parsed arguments
fn run_matches(matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        let mut cmd = build_command();
        let mut script = Vec::new();
        clap_complete::generate(shell, &mut cmd, "cmdln", &mut script);
        return write_output(io::stdout().lock(), &script);
    }

    let printer = Printer::new(get_verbosity(matches));

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let explicit = matches.get_one::<PathBuf>("file").map(PathBuf::as_path);
    let (config, config_path) = load_config(explicit)?;
    if let Some(path) = &config_path {
        printer.info(&format!("Using config file: {}", path.display()));
    }

    let inputs = match command_from_args(matches) {
        Some(command) => vec![command],
        None if io::stdin().is_terminal() => vec![String::new()],
        None => read_commands(io::stdin().lock()).context("Failed to read commands from stdin")?,
    };

    let use_aliases = !matches.get_flag("no-alias");
    let commands: Vec<ParsedCommand> = inputs
        .iter()
        .map(|input| {
            let parsed = parse_command(input, &config, use_aliases);
            printer.debug(&format!(
                "Parsed {:?}: action '{}' with {} argument(s)",
                input,
                parsed.action,
                parsed.args.len()
            ));
            parsed
        })
        .collect();

    let format = matches
        .get_one::<OutputFormat>("output")
        .copied()
        .unwrap_or(config.output);

    let rendered = render(&commands, format)?;
    write_output(io::stdout().lock(), rendered.as_bytes())
}

/// Write rendered output, treating a closed reader as success
fn write_output<W: Write>(mut writer: W, bytes: &[u8]) -> anyhow::Result<()> {
    match writer.write_all(bytes).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write output"),
    }
}

/// Run the CLI application with the given arguments
///
/// Help and version requests print and exit with status 0; other argument
/// errors are returned so the caller reports them like any other failure.
pub fn run_from<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(anyhow::Error::new(e).context("Invalid command-line arguments")),
    };
    run_matches(&matches)
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    run_from(std::env::args_os())
}
