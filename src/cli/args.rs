//! Command-line argument parsing.
//!
//! Flags are handled before the terminal is touched.

use std::path::PathBuf;

/// How to start the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Force the in-memory demo backend
    pub demo: bool,
    /// Config file to read instead of the default location
    pub config: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the panel (default)
    Run(RunOptions),
    /// Arguments that cannot be acted on, with the reason
    Invalid(String),
}

/// Parse command-line arguments (including the program name).
///
/// `--version` and `--help` win over everything else; unknown flags are
/// ignored.
///
/// ```
/// use painel::cli::args::{parse_args, CliCommand, RunOptions};
///
/// let args = vec!["painel".to_string(), "--demo".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run(RunOptions { demo: true, config: None })
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut problem = None;
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--demo" => options.demo = true,
            "--config" | "-c" => match args.next_if(|next| !next.starts_with('-')) {
                Some(path) => options.config = Some(path.into()),
                None => problem = Some(format!("{} needs a file path", arg)),
            },
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    if path.is_empty() {
                        problem = Some("--config needs a file path".to_string());
                    } else {
                        options.config = Some(path.into());
                    }
                }
            }
        }
    }

    match problem {
        Some(reason) => CliCommand::Invalid(reason),
        None => CliCommand::Run(options),
    }
}
