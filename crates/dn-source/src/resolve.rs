//! Pure relative reference resolution.

/// Resolve a relative asset reference against the note that contains it.
///
/// The base is `note_path`'s directory (every segment except the final
/// filename). Reference segments are processed left to right: `.` and empty
/// segments are ignored, `..` pops one directory (popping past the root is a
/// no-op), anything else is pushed. Backslashes are accepted as separators so
/// references authored on Windows resolve too.
///
/// Returns `None` when either input is empty; no resolution is attempted.
/// The result is only a lookup key; resolution itself never fails.
///
/// # Examples
///
/// ```
/// use dn_source::resolve_relative;
///
/// assert_eq!(
///     resolve_relative("a/b/c.md", "../d.png").as_deref(),
///     Some("a/d.png")
/// );
/// assert_eq!(
///     resolve_relative("a/b/c.md", "./img/e.png").as_deref(),
///     Some("a/b/img/e.png")
/// );
/// assert_eq!(resolve_relative("", "x"), None);
/// ```
#[must_use]
pub fn resolve_relative(note_path: &str, reference: &str) -> Option<String> {
    if note_path.is_empty() || reference.is_empty() {
        return None;
    }

    let mut base: Vec<&str> = note_path.split('/').collect();
    base.pop(); // drop the filename
    let mut stack: Vec<&str> = base.into_iter().filter(|s| !s.is_empty()).collect();

    let normalized = reference.replace('\\', "/");
    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    Some(stack.join("/"))
}
