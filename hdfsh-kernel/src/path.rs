//! Remote path resolution.
//!
//! Remote paths are plain `/`-separated strings; nothing here touches the
//! local filesystem.

/// Normalize a path to absolute form: duplicate slashes collapse, `.` is
/// dropped, `..` pops one segment (never above root) and there is no
/// trailing slash except for `/` itself.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Resolve `input` against the working directory `cwd`.
///
/// Empty input yields `cwd`; an absolute input replaces it; a relative one is
/// appended. Every `..` walks up one level, so `..` gives the parent and
/// `../..` the grandparent.
pub fn resolve(cwd: &str, input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        normalize(cwd)
    } else if input.starts_with('/') {
        normalize(input)
    } else {
        normalize(&format!("{}/{}", cwd, input))
    }
}

/// Final segment of a path, empty for `/`.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
}

/// Split a partially typed path into its directory part (up to and including
/// the last `/`) and the segment being typed.
///
/// `"data/lo"` gives `("data/", "lo")`, `"lo"` gives `("", "lo")`.
pub fn split_partial(input: &str) -> (&str, &str) {
    match input.rfind('/') {
        Some(idx) => input.split_at(idx + 1),
        None => ("", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("//user///alice//"), "/user/alice");
        assert_eq!(normalize("/user/./alice"), "/user/alice");
        assert_eq!(normalize("/user/alice/.."), "/user");
        assert_eq!(normalize("/.."), "/");
    }

    #[test]
    fn test_resolve_empty_is_cwd() {
        for cwd in ["/", "/user", "/user/alice/data"] {
            assert_eq!(resolve(cwd, ""), cwd);
        }
    }

    #[test]
    fn test_resolve_dotdot_is_parent() {
        assert_eq!(resolve("/user/alice", ".."), "/user");
        assert_eq!(resolve("/user", ".."), "/");
        assert_eq!(resolve("/", ".."), "/");
    }

    #[test]
    fn test_resolve_multi_level_dotdot() {
        assert_eq!(resolve("/a/b/c", "../.."), "/a");
        assert_eq!(resolve("/a/b/c", "../../.."), "/");
        assert_eq!(resolve("/a/b/c", "../../../../.."), "/");
        assert_eq!(resolve("/a/b", "../sibling"), "/a/sibling");
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        assert_eq!(resolve("/user", "alice"), "/user/alice");
        assert_eq!(resolve("/user", "alice/"), "/user/alice");
        assert_eq!(resolve("/", "tmp"), "/tmp");
        assert_eq!(resolve("/user", "/tmp"), "/tmp");
        assert_eq!(resolve("/user", "//tmp//x/"), "/tmp/x");
        assert_eq!(resolve("/user", "./alice"), "/user/alice");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/user/alice"), "alice");
        assert_eq!(basename("/user/alice/"), "alice");
        assert_eq!(basename("/"), "");
    }

    #[test]
    fn test_split_partial() {
        assert_eq!(split_partial("data/lo"), ("data/", "lo"));
        assert_eq!(split_partial("lo"), ("", "lo"));
        assert_eq!(split_partial("/"), ("/", ""));
        assert_eq!(split_partial("/user/"), ("/user/", ""));
        assert_eq!(split_partial(""), ("", ""));
    }
}
