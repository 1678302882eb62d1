//! The interactive loop: line editing, history and tab completion.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use hdfsh_api::Value;
use hdfsh_kernel::{CompletionKind, Kernel, Step};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// Line-editor helper that completes against the remote namespace.
struct ShellHelper {
    kernel: Arc<Mutex<Kernel>>,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (completions, start) = lock(&self.kernel).complete(line, pos);
        let pairs = completions
            .into_iter()
            .map(|c| {
                let replacement = match c.kind {
                    CompletionKind::Directory => format!("{}/", c.text),
                    CompletionKind::File | CompletionKind::Command => c.text.clone(),
                };
                Pair {
                    display: c.text,
                    replacement,
                }
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

/// The lock is never held across a panic that matters; recover the kernel.
fn lock(kernel: &Mutex<Kernel>) -> MutexGuard<'_, Kernel> {
    kernel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run the read-eval-print loop until `exit`, `quit` or end of input.
pub fn run(kernel: Kernel, history: Option<PathBuf>) -> anyhow::Result<()> {
    let kernel = Arc::new(Mutex::new(kernel));

    let mut rl: Editor<ShellHelper, DefaultHistory> =
        Editor::new().map_err(|e| anyhow!("failed to init line editor: {e}"))?;
    rl.set_helper(Some(ShellHelper {
        kernel: kernel.clone(),
    }));

    if let Some(path) = &history {
        load_history(&mut rl, path);
    }

    println!("{}", lock(&kernel).intro());

    loop {
        let prompt = lock(&kernel).prompt();
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => return Err(anyhow!("readline error: {e}")),
        };

        if !line.trim().is_empty() {
            if let Err(e) = rl.add_history_entry(line.as_str()) {
                tracing::warn!("failed to record history: {}", e);
            }
        }

        match lock(&kernel).execute(&line) {
            Ok(Step::Continue(value)) => print_value(&value),
            Ok(Step::Exit) => break,
            Err(e) => eprintln!("{e:#}"),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("could not save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn load_history(rl: &mut Editor<ShellHelper, DefaultHistory>, path: &Path) {
    match rl.load_history(path) {
        Ok(()) => tracing::debug!("loaded history from {}", path.display()),
        // First run: nothing saved yet.
        Err(ReadlineError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not load history from {}: {}", path.display(), e),
    }
}

fn print_value(value: &Value) {
    if value.is_unit() {
        return;
    }
    let text = value.to_text();
    if !text.is_empty() {
        println!("{}", text);
    }
}
