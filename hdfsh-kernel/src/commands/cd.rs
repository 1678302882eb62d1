//! The `cd` command - change the remote working directory.

use super::{ArgCompletion, CommandContext, Parsed, ShellCommand, help_text, parse};
use crate::error::ShellError;
use crate::path;
use clap::Parser;
use hdfsh_api::Value;

pub struct CdCommand;

#[derive(Debug, Parser)]
#[command(name = "cd", about = "change the working directory")]
struct CdArgs {
    /// the directory to change to, `-` for the previous one
    #[arg(default_value = "/")]
    directory: String,
}

impl ShellCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn about(&self) -> &'static str {
        "change the working directory"
    }

    fn help(&self) -> String {
        help_text::<CdArgs>()
    }

    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Path
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value> {
        let args = match parse::<CdArgs>(self.name(), args)? {
            Parsed::Args(args) => args,
            Parsed::Help(text) => return Ok(Value::String(text)),
        };

        let target = if args.directory == "-" {
            ctx.state
                .previous_cwd
                .clone()
                .unwrap_or_else(|| ctx.state.cwd.clone())
        } else {
            path::resolve(&ctx.state.cwd, &args.directory)
        };

        // Any successful status commits, whatever kind of entry it names.
        match ctx.lister().status(&target) {
            Ok(_) => {
                tracing::info!(from = %ctx.state.cwd, to = %target, "changed directory");
                ctx.state.set_cwd(target);
                Ok(Value::Unit)
            }
            Err(ShellError::Transport(e)) => Err(ShellError::Transport(e).into()),
            Err(e) => {
                tracing::debug!("cd to {} refused: {}", target, e);
                anyhow::bail!("cd: {}: No such file or directory", target)
            }
        }
    }
}
