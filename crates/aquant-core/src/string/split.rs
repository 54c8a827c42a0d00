//! Splitting, strtok-style tokenizing, and joining.

/// Split on every `delim`, keeping empty fields.
///
/// `"a,b,,d,"` yields five fields; an empty input yields one empty field.
#[must_use]
pub fn split(s: &str, delim: char) -> Vec<String> {
    s.split(delim).map(str::to_owned).collect()
}

/// Tokenize like `strtok`: any character of `delimiters` separates tokens,
/// runs of delimiters collapse, and empty tokens are never produced.
#[must_use]
pub fn tokenize<'a>(s: &'a str, delimiters: &str) -> Vec<&'a str> {
    s.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Join optional parts.
///
/// With a separator, absent parts render as empty fields so positions are
/// preserved. Without one, parts are simply concatenated.
#[must_use]
pub fn join(parts: &[Option<&str>], separator: Option<&str>) -> String {
    match separator {
        Some(sep) => parts
            .iter()
            .map(|part| part.unwrap_or_default())
            .collect::<Vec<_>>()
            .join(sep),
        None => parts.iter().flatten().copied().collect(),
    }
}
