//! Shell state - the remote working directory.

use crate::path;

/// The session's mutable state.
///
/// `cwd` is always absolute and normalized; it changes only through
/// [`ShellState::set_cwd`], which `cd` calls after the namenode confirms the
/// target exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    /// Current working directory on the remote namespace.
    pub cwd: String,

    /// Previous working directory, for `cd -`.
    pub previous_cwd: Option<String>,
}

impl ShellState {
    /// A fresh session rooted at `/`.
    pub fn new() -> Self {
        Self {
            cwd: "/".to_string(),
            previous_cwd: None,
        }
    }

    /// Change the working directory, remembering the old one.
    pub fn set_cwd(&mut self, cwd: String) {
        debug_assert_eq!(cwd, path::normalize(&cwd));
        let old = std::mem::replace(&mut self.cwd, cwd);
        self.previous_cwd = Some(old);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
