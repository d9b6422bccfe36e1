//! Command-line interface.
//!
//! Call [`run_cli_command`] early in `main()`, before any terminal setup:
//!
//! ```ignore
//! use painel::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{usage, version_line, VERSION};

/// Handle commands that print and exit.
///
/// Returns the exit code for `--version`, `--help` and unusable
/// arguments, or `None` when the panel should start.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("painel: {}\n\n{}", reason, usage());
            Some(2)
        }
        CliCommand::Run(_) => None,
    }
}
