//! Command registry for looking up shell commands.

use super::ShellCommand;
use std::collections::BTreeMap;

use super::basic::PwdCommand;
use super::cd::CdCommand;
use super::help::HelpCommand;
use super::ls::LsCommand;
use super::stat::StatCommand;

/// Names handled by the kernel itself rather than a registered command.
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Registry of all available commands, built once at startup.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn ShellCommand>>,
}

impl CommandRegistry {
    /// Create a new registry with all built-in commands registered.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };

        // Namespace browsing
        registry.register(LsCommand);
        registry.register(CdCommand);
        registry.register(StatCommand);
        registry.register(PwdCommand);

        registry.register(HelpCommand);

        registry
    }

    fn register<C: ShellCommand + 'static>(&mut self, cmd: C) {
        self.commands.insert(cmd.name(), Box::new(cmd));
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn ShellCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// All registered command names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Registered commands, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ShellCommand> + '_ {
        self.commands.values().map(|c| c.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
