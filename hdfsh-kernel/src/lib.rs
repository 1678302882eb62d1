//! hdfsh Kernel - the namespace shell core.
//!
//! This crate contains:
//! - The WebHDFS request layer (redirects, error bodies, JSON decoding)
//! - Remote path resolution and the working-directory state
//! - Directory listing and `ls`-style formatting
//! - The commands (`ls`, `cd`, `stat`, ...) and their registry
//! - Tab completion against the remote namespace

pub mod client;
pub mod commands;
pub mod completion;
pub mod config;
pub mod format;
pub mod lister;
pub mod parser;
pub mod path;

mod error;
mod state;

pub use client::{NamespaceClient, Operation, RequestOptions, Response};
pub use commands::{CommandContext, CommandRegistry, ShellCommand};
pub use completion::{Completion, CompletionEngine, CompletionKind};
pub use config::ClientConfig;
pub use error::ShellError;
pub use format::{Columnize, OnePerLine};
pub use lister::{DirectoryLister, FileStatus};
pub use state::ShellState;

use commands::EXIT_COMMANDS;
use hdfsh_api::Value;

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Print the value and prompt again.
    Continue(Value),
    /// `exit` or `quit` was entered.
    Exit,
}

/// The shell kernel - owns the session state and executes commands.
pub struct Kernel {
    state: ShellState,
    client: NamespaceClient,
    commands: CommandRegistry,
    columns: Box<dyn Columnize>,
}

impl Kernel {
    /// Create a kernel for the namenode described by `config`, starting at `/`.
    pub fn new(config: ClientConfig, columns: Box<dyn Columnize>) -> Result<Self, ShellError> {
        Ok(Self {
            state: ShellState::new(),
            client: NamespaceClient::new(config)?,
            commands: CommandRegistry::new(),
            columns,
        })
    }

    /// Get a reference to the current shell state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Banner shown when the session starts.
    pub fn intro(&self) -> String {
        format!("HDFS browser for {}", self.client.config().endpoint)
    }

    /// Prompt reflecting the namenode host and working directory.
    pub fn prompt(&self) -> String {
        format!("HDFS {}:{} > ", self.client.config().host(), self.state.cwd)
    }

    /// Tokenize and execute one line.
    ///
    /// Errors leave the session state untouched; only `exit`/`quit` end the
    /// session.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Step> {
        let words = parser::split_line(line)?;
        let Some((name, args)) = words.split_first() else {
            return Ok(Step::Continue(Value::Unit));
        };

        if EXIT_COMMANDS.contains(&name.as_str()) {
            return Ok(Step::Exit);
        }

        let cmd = self
            .commands
            .get(name)
            .ok_or_else(|| ShellError::CommandNotFound(name.clone()))?;

        tracing::debug!(command = %name, ?args, cwd = %self.state.cwd, "execute");
        let mut ctx = CommandContext {
            state: &mut self.state,
            client: &self.client,
            columns: self.columns.as_ref(),
            commands: &self.commands,
        };
        let value = cmd.execute(args, &mut ctx)?;
        Ok(Step::Continue(value))
    }

    /// Get completions for the given input at the cursor position.
    ///
    /// Returns (completions, start_offset) where start_offset is the position
    /// where the replaced text starts.
    pub fn complete(&self, input: &str, cursor: usize) -> (Vec<Completion>, usize) {
        let engine = CompletionEngine::new(
            &self.state,
            &self.commands,
            DirectoryLister::new(&self.client),
        );
        engine.complete(input, cursor)
    }
}
