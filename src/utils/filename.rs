use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex compile"));

/// Reduces an uploaded file name to a safe, flat ASCII name.
///
/// Path separators become word breaks, whitespace runs become `_`, any other
/// character outside `[A-Za-z0-9_.-]` is dropped, and leading or trailing
/// dots and underscores are trimmed. The result may be empty.
///
/// # Examples
///
/// ```
/// use docsum::utils::filename::secure_filename;
///
/// assert_eq!(secure_filename("My cool report.pdf"), "My_cool_report.pdf");
/// assert_eq!(secure_filename("../../../etc/passwd"), "etc_passwd");
/// ```
#[must_use]
pub fn secure_filename(raw: &str) -> String {
    let ascii: String = raw.chars().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
