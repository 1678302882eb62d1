//! Listing output - permission strings, timestamps, long and short formats.

use chrono::{DateTime, Datelike, TimeZone};
use hdfsh_api::{Entry, EntryKind, Permission};

/// Lays a sorted list of names out for the terminal.
///
/// Implemented by the front end, which knows the terminal width.
pub trait Columnize: Send + Sync {
    fn columnize(&self, names: &[String]) -> String;
}

/// One name per line, for output that is not a terminal.
pub struct OnePerLine;

impl Columnize for OnePerLine {
    fn columnize(&self, names: &[String]) -> String {
        names.join("\n")
    }
}

/// `drwxr-xr-x` style rendering of an entry's kind and permission bits.
pub fn permission_string(kind: EntryKind, permission: Permission) -> String {
    let file_type = match kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::File => '-',
    };

    let mut out = String::with_capacity(10);
    out.push(file_type);
    for digit in permission.digits() {
        out.push(if digit & 0b100 != 0 { 'r' } else { '-' });
        out.push(if digit & 0b010 != 0 { 'w' } else { '-' });
        out.push(if digit & 0b001 != 0 { 'x' } else { '-' });
    }
    out
}

/// Format an epoch-millisecond timestamp the way `ls -l` does: time of day
/// for the current year, the year otherwise.
///
/// The timestamp is shown in `now`'s time zone.
pub fn format_time<Tz: TimeZone>(millis: u64, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(time) = i64::try_from(millis)
        .ok()
        .and_then(|ms| now.timezone().timestamp_millis_opt(ms).single())
    else {
        return "?".to_string();
    };

    let tail = if time.year() != now.year() {
        time.year().to_string()
    } else {
        time.format("%H:%M").to_string()
    };
    format!("{} {:>5}", time.format("%b %d"), tail)
}

/// One `ls -l` line:
/// `<perm>  <repl> <owner> <group> <length> <access time> <name>`.
pub fn long_line<Tz: TimeZone>(entry: &Entry, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}  {:>3} {} {} {:>13} {} {}",
        permission_string(entry.kind, entry.permission),
        entry.replication,
        entry.owner,
        entry.group,
        entry.length,
        format_time(entry.access_time, now),
        entry.name,
    )
}

/// Names of `entries`, sorted, handed to `columns` for layout.
pub fn short_listing(entries: &[Entry], columns: &dyn Columnize) -> String {
    let mut names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    names.sort();
    if names.is_empty() {
        return String::new();
    }
    columns.columnize(&names)
}
