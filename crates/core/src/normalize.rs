//! Specialty term normalization

/// Profession suffix whose noun form ends in "y" ("cardiologist" -> "cardiology")
const PROFESSION_SUFFIX: &str = "ist";

/// Map a specialty token to the substring patterns that should match it.
///
/// Returns two patterns when the token ends in "ist" (case-insensitively):
/// the literal token and the token with the suffix replaced by "y". Otherwise
/// returns the literal token alone. Both are wrapped for substring matching.
pub fn specialty_patterns(specialty: &str) -> Vec<String> {
    let mut patterns = vec![contains_pattern(specialty)];

    if let Some(stem) = strip_profession_suffix(specialty) {
        patterns.push(contains_pattern(&format!("{}y", stem)));
    }

    patterns
}

fn strip_profession_suffix(term: &str) -> Option<&str> {
    let split = term.len().checked_sub(PROFESSION_SUFFIX.len())?;
    if !term.is_char_boundary(split) {
        return None;
    }
    let (stem, suffix) = term.split_at(split);
    suffix
        .eq_ignore_ascii_case(PROFESSION_SUFFIX)
        .then_some(stem)
}

/// Wrap a literal in `%` so it matches anywhere in the column.
pub fn contains_pattern(literal: &str) -> String {
    format!("%{}%", escape_like(literal))
}

/// Escape LIKE metacharacters so user text only ever matches literally
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
