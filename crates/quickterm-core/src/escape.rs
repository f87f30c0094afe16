//! String escaping utilities for terminal commands and i3 criteria.

/// Escape a string for use in shell commands (single-quoted).
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Wrap a string in double quotes, escaping embedded quotes and backslashes.
pub fn double_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Escape special regex characters.
///
/// i3 criteria such as `con_mark` are PCRE patterns, so literal marks must be
/// escaped before they are anchored.
pub fn escape_regex(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
