//! Escaping utilities for report generation.
//!
//! Ingredient names and product labels come straight from user input and
//! may contain commas, quotes or Markdown syntax. Escape them before
//! embedding in CSV or Markdown output.

/// Quote a CSV field when it contains a delimiter, quote or line break.
///
/// # Examples
///
/// ```
/// use ingredient_diff::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("water"), "water");
/// assert_eq!(escape_csv("vitamin e, tocopherol"), "\"vitamin e, tocopherol\"");
/// assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
#[must_use]
pub fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape a string for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use ingredient_diff::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a|b"), "a\\|b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for Markdown inline content.
///
/// # Examples
///
/// ```
/// use ingredient_diff::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '#' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' | '\r' => result.push(' '),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_plain_field_untouched() {
        assert_eq!(escape_csv("sodium hyaluronate"), "sodium hyaluronate");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_csv_newline_is_quoted() {
        assert_eq!(escape_csv("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_markdown_inline_underscore() {
        assert_eq!(escape_markdown_inline("peg_100"), "peg\\_100");
    }
}
