//! The `stat` command - show every metadata field of a path.

use super::{ArgCompletion, CommandContext, Parsed, ShellCommand, help_text, parse};
use crate::path;
use clap::Parser;
use hdfsh_api::Value;

pub struct StatCommand;

#[derive(Debug, Parser)]
#[command(name = "stat", about = "displays information about the specified file")]
struct StatArgs {
    /// the name of the file to query
    file: String,
}

impl ShellCommand for StatCommand {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn about(&self) -> &'static str {
        "displays information about the specified file"
    }

    fn help(&self) -> String {
        help_text::<StatArgs>()
    }

    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Path
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> anyhow::Result<Value> {
        let args = match parse::<StatArgs>(self.name(), args)? {
            Parsed::Args(args) => args,
            Parsed::Help(text) => return Ok(Value::String(text)),
        };

        let target = path::resolve(&ctx.state.cwd, &args.file);
        let status = ctx.lister().status(&target)?;

        let mut fields: Vec<(String, Value)> = status
            .fields
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Value::Record(fields))
    }
}
