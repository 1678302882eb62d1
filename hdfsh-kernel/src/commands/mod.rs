//! Shell commands.
//!
//! Each command parses its own arguments, talks to the namenode through the
//! context and returns a structured `Value` for the front end to print.

mod args;
mod basic;
mod cd;
mod help;
mod ls;
mod registry;
mod stat;

pub use args::{Parsed, help_text, parse};
pub use registry::{CommandRegistry, EXIT_COMMANDS};

use crate::ShellState;
use crate::client::NamespaceClient;
use crate::format::Columnize;
use crate::lister::DirectoryLister;
use hdfsh_api::Value;

/// Context passed to commands during execution.
pub struct CommandContext<'a> {
    /// The session state (working directory).
    pub state: &'a mut ShellState,
    /// Namenode client.
    pub client: &'a NamespaceClient,
    /// Layout for short listings.
    pub columns: &'a dyn Columnize,
    /// The registry, for `help`.
    pub commands: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    pub fn lister(&self) -> DirectoryLister<'a> {
        DirectoryLister::new(self.client)
    }
}

/// What a command's arguments complete to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCompletion {
    None,
    /// Remote paths, listed on demand.
    Path,
    /// Command names.
    Command,
}

/// A command the shell can dispatch by name.
pub trait ShellCommand: Send + Sync {
    /// The command name (e.g., "ls", "cd")
    fn name(&self) -> &'static str;

    /// One-line description for `help`.
    fn about(&self) -> &'static str;

    /// Full usage text.
    fn help(&self) -> String;

    /// How this command's arguments are completed.
    fn completion(&self) -> ArgCompletion {
        ArgCompletion::None
    }

    /// Execute the command with the given arguments.
    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value>;
}
