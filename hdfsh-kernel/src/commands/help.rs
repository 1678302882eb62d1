//! The `help` command - list commands or show one command's usage.

use super::registry::EXIT_COMMANDS;
use super::{ArgCompletion, CommandContext, Parsed, ShellCommand, help_text, parse};
use crate::error::ShellError;
use clap::Parser;
use hdfsh_api::Value;

pub struct HelpCommand;

#[derive(Debug, Parser)]
#[command(name = "help", about = "list commands or describe one")]
struct HelpArgs {
    /// the command to describe
    command: Option<String>,
}

impl ShellCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn about(&self) -> &'static str {
        "list commands or describe one"
    }

    fn help(&self) -> String {
        help_text::<HelpArgs>()
    }

    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Command
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value> {
        let args = match parse::<HelpArgs>(self.name(), args)? {
            Parsed::Args(args) => args,
            Parsed::Help(text) => return Ok(Value::String(text)),
        };

        match args.command.as_deref() {
            Some(name) if EXIT_COMMANDS.contains(&name) => {
                Ok(Value::String(format!("{}: quits the shell", name)))
            }
            Some(name) => {
                let cmd = ctx
                    .commands
                    .get(name)
                    .ok_or_else(|| ShellError::CommandNotFound(name.to_string()))?;
                Ok(Value::String(cmd.help()))
            }
            None => {
                let mut lines: Vec<Value> = ctx
                    .commands
                    .iter()
                    .map(|cmd| Value::String(format!("{:<6} {}", cmd.name(), cmd.about())))
                    .collect();
                for name in EXIT_COMMANDS {
                    lines.push(Value::String(format!("{:<6} quits the shell", name)));
                }
                Ok(Value::List(lines))
            }
        }
    }
}
