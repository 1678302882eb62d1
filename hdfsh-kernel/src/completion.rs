//! Tab completion engine.
//!
//! Provides completions for:
//! - Command names (first word of the line)
//! - Remote paths, listed from the namenode on demand
//! - Command names as the argument of `help`

use crate::ShellState;
use crate::commands::{ArgCompletion, CommandRegistry, EXIT_COMMANDS};
use crate::lister::DirectoryLister;
use crate::{parser, path};

/// A completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The text to insert, shell-escaped so it splits back into one word.
    pub text: String,
    /// Type of completion for styling.
    pub kind: CompletionKind,
}

/// Type of completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    File,
    Directory,
    Command,
}

/// Completion engine.
pub struct CompletionEngine<'a> {
    state: &'a ShellState,
    commands: &'a CommandRegistry,
    lister: DirectoryLister<'a>,
}

impl<'a> CompletionEngine<'a> {
    pub fn new(
        state: &'a ShellState,
        commands: &'a CommandRegistry,
        lister: DirectoryLister<'a>,
    ) -> Self {
        Self {
            state,
            commands,
            lister,
        }
    }

    /// Get completions for the current input.
    ///
    /// # Arguments
    /// * `input` - The full input line
    /// * `cursor` - Cursor position (byte offset) in the input
    ///
    /// # Returns
    /// A tuple of (completions, start_offset) where start_offset is where the
    /// text being replaced begins. For paths that is the start of the final
    /// segment, so candidates are bare (escaped) entry names.
    pub fn complete(&self, input: &str, cursor: usize) -> (Vec<Completion>, usize) {
        let mut cursor = cursor.min(input.len());
        while !input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        let input = &input[..cursor];

        let (word, word_start) = find_current_word(input);
        let before_word = input[..word_start].trim();

        if before_word.is_empty() {
            return (self.complete_command(word), word_start);
        }

        let command = before_word.split_whitespace().next().unwrap_or("");
        match self.commands.get(command).map(|c| c.completion()) {
            Some(ArgCompletion::Path) => {
                let (dir, segment) = path::split_partial(word);
                let completions = self.complete_path(
                    &parser::unescape_partial(dir),
                    &parser::unescape_partial(segment),
                );
                (completions, word_start + dir.len())
            }
            Some(ArgCompletion::Command) => (self.complete_command(word), word_start),
            Some(ArgCompletion::None) | None => (Vec::new(), word_start),
        }
    }

    /// Complete command names.
    fn complete_command(&self, prefix: &str) -> Vec<Completion> {
        let mut completions: Vec<Completion> = self
            .commands
            .names()
            .chain(EXIT_COMMANDS)
            .filter(|name| name.starts_with(prefix))
            .map(|name| Completion {
                text: name.to_string(),
                kind: CompletionKind::Command,
            })
            .collect();
        completions.sort_by(|a, b| a.text.cmp(&b.text));
        completions
    }

    /// Complete the entries of `dir` (resolved against the working directory)
    /// whose names start with `segment`. An unlistable directory completes to
    /// nothing.
    fn complete_path(&self, dir: &str, segment: &str) -> Vec<Completion> {
        let dir = path::resolve(&self.state.cwd, dir);

        let entries = match self.lister.list(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("no completions for {}: {}", dir, e);
                return Vec::new();
            }
        };

        let mut completions: Vec<Completion> = entries
            .into_iter()
            .filter(|entry| !entry.name.is_empty() && entry.name.starts_with(segment))
            .map(|entry| Completion {
                kind: if entry.is_dir() {
                    CompletionKind::Directory
                } else {
                    CompletionKind::File
                },
                text: parser::escape(&entry.name),
            })
            .collect();
        completions.sort_by(|a, b| a.text.cmp(&b.text));
        completions
    }
}

/// Find the word ending at the end of `input`, and where it starts.
///
/// Whitespace that is backslash-escaped or inside quotes does not end a word.
pub fn find_current_word(input: &str) -> (&str, usize) {
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => {}
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, c) if c.is_whitespace() => start = i + c.len_utf8(),
            (None, _) => {}
        }
    }
    (&input[start..], start)
}
