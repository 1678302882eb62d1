//! Basic commands - pwd.

use super::{CommandContext, Parsed, ShellCommand, help_text, parse};
use clap::Parser;
use hdfsh_api::Value;

pub struct PwdCommand;

#[derive(Debug, Parser)]
#[command(name = "pwd", about = "print the working directory")]
struct PwdArgs {}

impl ShellCommand for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn about(&self) -> &'static str {
        "print the working directory"
    }

    fn help(&self) -> String {
        help_text::<PwdArgs>()
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value> {
        match parse::<PwdArgs>(self.name(), args)? {
            Parsed::Args(_) => Ok(Value::String(ctx.state.cwd.clone())),
            Parsed::Help(text) => Ok(Value::String(text)),
        }
    }
}
