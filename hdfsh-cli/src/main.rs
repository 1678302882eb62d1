//! hdfsh - an interactive shell for browsing an HDFS namespace over WebHDFS.

mod columns;
mod repl;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hdfsh_kernel::config::parse_endpoint;
use hdfsh_kernel::{ClientConfig, Columnize, Kernel, OnePerLine};
use tracing_subscriber::EnvFilter;

use crate::columns::TerminalColumns;

const HISTORY_FILE: &str = ".hdfsh_history";

#[derive(Debug, Parser)]
#[command(name = "hdfsh", version, about = "Browse an HDFS namespace over WebHDFS")]
struct Args {
    /// namenode HTTP address, as host:port
    #[arg(value_parser = parse_endpoint)]
    endpoint: String,

    /// talk to the namenode over https
    #[arg(long, env = "HDFSH_HTTPS")]
    https: bool,

    /// per-request timeout in seconds
    #[arg(long, env = "HDFSH_TIMEOUT", value_name = "SECS")]
    timeout: Option<u64>,

    /// where to keep line history
    #[arg(long, env = "HDFSH_HISTORY", value_name = "FILE")]
    history: Option<PathBuf>,

    /// do not read or write a history file; overrides --history
    #[arg(long)]
    no_history: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint.clone())
            .with_https(self.https)
            .with_timeout(self.timeout.map(Duration::from_secs))
    }

    fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(HISTORY_FILE)))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting hdfsh");

    let columns: Box<dyn Columnize> = if std::io::stdout().is_terminal() {
        Box::new(TerminalColumns::from_env())
    } else {
        Box::new(OnePerLine)
    };

    let kernel = Kernel::new(args.client_config(), columns)?;
    repl::run(kernel, args.history_path())
}
