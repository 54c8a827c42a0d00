//! Searches and ordering over arrays of optional strings.
//!
//! `None` entries stand in for C `NULL` pointers. They compare equal to each
//! other and order before every string, including `""`.

/// Index of the first entry equal to `target`.
#[must_use]
pub fn find_string(names: &[Option<&str>], target: Option<&str>) -> Option<usize> {
    names.iter().position(|&name| name == target)
}

#[must_use]
pub fn count_occurrence_string(names: &[Option<&str>], target: Option<&str>) -> usize {
    names.iter().filter(|&&name| name == target).count()
}

/// Greatest entry; `None` for an empty array, `Some(None)` if every entry is absent.
#[must_use]
pub fn max_string<'a>(names: &[Option<&'a str>]) -> Option<Option<&'a str>> {
    names.iter().copied().max()
}

#[must_use]
pub fn min_string<'a>(names: &[Option<&'a str>]) -> Option<Option<&'a str>> {
    names.iter().copied().min()
}

/// Sort ascending with absent entries first.
pub fn sort_strings(names: &mut [Option<&str>]) {
    names.sort_unstable();
}
