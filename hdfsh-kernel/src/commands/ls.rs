//! The `ls` command - list directory contents.

use super::{ArgCompletion, CommandContext, Parsed, ShellCommand, help_text, parse};
use crate::{format, path};
use clap::Parser;
use hdfsh_api::Value;

pub struct LsCommand;

#[derive(Debug, Parser)]
#[command(name = "ls", about = "lists the contents of a directory")]
struct LsArgs {
    /// the name of the directory to list
    directory: Option<String>,

    /// use a long listing format
    #[arg(short = 'l')]
    long_format: bool,
}

impl ShellCommand for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn about(&self) -> &'static str {
        "lists the contents of a directory"
    }

    fn help(&self) -> String {
        help_text::<LsArgs>()
    }

    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Path
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value> {
        let args = match parse::<LsArgs>(self.name(), args)? {
            Parsed::Args(args) => args,
            Parsed::Help(text) => return Ok(Value::String(text)),
        };

        let target = path::resolve(&ctx.state.cwd, args.directory.as_deref().unwrap_or(""));
        let mut entries = ctx.lister().list(&target)?;

        // Listing a file returns its own status with an empty name.
        for entry in entries.iter_mut().filter(|e| e.name.is_empty()) {
            entry.name = path::basename(&target).to_string();
        }

        if args.long_format {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            let now = chrono::Local::now();
            Ok(Value::List(
                entries
                    .iter()
                    .map(|e| Value::String(format::long_line(e, &now)))
                    .collect(),
            ))
        } else {
            Ok(Value::String(format::short_listing(&entries, ctx.columns)))
        }
    }
}
