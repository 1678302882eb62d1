//! Argument parsing for shell commands.
//!
//! Each command declares its arguments with `clap`. Parsing never exits the
//! process: help requests and usage errors come back as values.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::ShellError;

/// Outcome of a successful parse.
#[derive(Debug)]
pub enum Parsed<T> {
    /// Arguments ready for the command.
    Args(T),
    /// `-h`/`--help` was given; the rendered help text.
    Help(String),
}

/// Parse `args` for the command `name`. Invalid syntax is a
/// [`ShellError::Usage`] carrying clap's message.
pub fn parse<T: Parser>(name: &str, args: &[String]) -> Result<Parsed<T>, ShellError> {
    let argv = std::iter::once(name.to_string()).chain(args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Parsed::Args(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Parsed::Help(e.render().to_string().trim_end().to_string()))
        }
        Err(e) => Err(ShellError::Usage(e.render().to_string().trim_end().to_string())),
    }
}

/// Full help text for a command's arguments.
pub fn help_text<T: CommandFactory>() -> String {
    T::command().render_help().to_string().trim_end().to_string()
}
