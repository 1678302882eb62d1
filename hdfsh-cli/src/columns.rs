//! Column-major grid layout for short listings, like `ls` on a terminal.

use hdfsh_kernel::Columnize;
use unicode_width::UnicodeWidthStr;

const DEFAULT_WIDTH: usize = 80;
const GAP: usize = 2;

/// Lays names out in as few rows as fit the terminal width.
pub struct TerminalColumns {
    width: usize,
}

impl TerminalColumns {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Width from `$COLUMNS`, falling back to 80.
    pub fn from_env() -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(width)
    }
}

impl Columnize for TerminalColumns {
    fn columnize(&self, names: &[String]) -> String {
        if names.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = names.iter().map(|n| n.as_str().width()).collect();

        // Fewest rows whose columns fit; one name per row always "fits".
        let mut rows = names.len();
        let mut column_widths = vec![widths.iter().copied().max().unwrap_or(0)];
        for candidate in 1..names.len() {
            let cols: Vec<usize> = widths
                .chunks(candidate)
                .map(|col| col.iter().copied().max().unwrap_or(0))
                .collect();
            let total = cols.iter().sum::<usize>() + GAP * (cols.len() - 1);
            if total <= self.width {
                rows = candidate;
                column_widths = cols;
                break;
            }
        }

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::new();
            let mut index = row;
            while index < names.len() {
                line.push_str(&names[index]);
                let next = index + rows;
                if next < names.len() {
                    let column = index / rows;
                    let pad = column_widths[column] - widths[index] + GAP;
                    line.extend(std::iter::repeat_n(' ', pad));
                }
                index = next;
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
