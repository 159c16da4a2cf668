//! Path algebra.
//!
//! Purely textual: nothing here touches a filesystem, so a resolved path
//! may or may not exist.

/// Resolve `input` against the working directory `current`.
///
/// Absolute inputs are normalized on their own; relative inputs are joined
/// onto `current`.
pub fn resolve(current: &str, input: &str) -> String {
    if input.starts_with('/') {
        join("/", input)
    } else {
        join(current, input)
    }
}

/// Join `relative` onto `base`, folding `.` and `..` segments.
///
/// `..` at the root stays at the root. The result always starts with `/` and
/// never ends with one, except for the root itself.
pub fn join(base: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for seg in relative.split('/') {
        match seg {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    render(&segments)
}

fn render(segments: &[&str]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::new();
    for seg in segments {
        out.push('/');
        out.push_str(seg);
    }
    out
}

/// Parent of a normalized absolute path. The root is its own parent.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Last segment of a normalized absolute path. Empty for the root.
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Whether `path` equals `ancestor` or lies beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    path == ancestor
        || (path.starts_with(ancestor) && path.as_bytes().get(ancestor.len()) == Some(&b'/'))
}
