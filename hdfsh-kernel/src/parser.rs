//! Command-line tokenizer.
//!
//! Splits a typed line into words with POSIX shell quoting: single quotes are
//! literal, double quotes group words, a backslash escapes the next char.
//! Completion uses [`escape`] so the names it inserts split back unchanged.

use crate::error::ShellError;

pub fn split_line(line: &str) -> Result<Vec<String>, ShellError> {
    shell_words::split(line).map_err(|e| ShellError::Usage(e.to_string()))
}

/// Backslash-escape the characters [`split_line`] treats specially.
pub fn escape(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_whitespace() || matches!(c, '\\' | '\'' | '"' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Undo shell quoting on a word that may still be incomplete (an open quote
/// or a trailing backslash), as typed before the cursor.
pub fn unescape_partial(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut quote: Option<char> = None;
    let mut chars = word.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '\\') => out.extend(chars.next()),
            (Some('"'), '\\') => match chars.next() {
                Some(next @ ('$' | '`' | '"' | '\\' | '\n')) => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => {}
            },
            (_, c) => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_line("ls  -l /tmp ").unwrap(), vec!["ls", "-l", "/tmp"]);
        assert!(split_line("").unwrap().is_empty());
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quotes() {
        assert_eq!(
            split_line("cd 'my dir'").unwrap(),
            vec!["cd", "my dir"]
        );
        assert_eq!(
            split_line(r#"stat "a \"b\" c""#).unwrap(),
            vec!["stat", r#"a "b" c"#]
        );
        assert_eq!(split_line("ls ''").unwrap(), vec!["ls", ""]);
    }

    #[test]
    fn test_split_backslash_escape() {
        assert_eq!(split_line(r"cd my\ dir").unwrap(), vec!["cd", "my dir"]);
    }

    #[test]
    fn test_split_keeps_hash_inside_word() {
        assert_eq!(split_line("stat a#b").unwrap(), vec!["stat", "a#b"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(matches!(split_line("cd 'oops"), Err(ShellError::Usage(_))));
        assert!(matches!(split_line("cd \"oops"), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_escape_splits_back_to_the_name() {
        for name in ["my dir", "it's", r"back\slash", "#tag", "tab\there", "plain"] {
            let line = format!("stat {}", escape(name));
            assert_eq!(split_line(&line).unwrap(), vec!["stat", name], "{}", line);
        }
        assert_eq!(escape("my dir"), r"my\ dir");
        assert_eq!(escape("alpha"), "alpha");
    }

    #[test]
    fn test_unescape_partial() {
        assert_eq!(unescape_partial(r"my\ d"), "my d");
        assert_eq!(unescape_partial("'my d"), "my d");
        assert_eq!(unescape_partial(r#""a \"q"#), r#"a "q"#);
        assert_eq!(unescape_partial(r"trailing\"), "trailing");
        assert_eq!(unescape_partial("plain"), "plain");
    }
}
