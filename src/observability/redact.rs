//! Masking of personal data before it reaches the logs.

const MASK: &str = "****";
const VISIBLE_SUFFIX: usize = 3;

/// Mask a name for logging, keeping only its last three characters.
///
/// Values whose trimmed form is three characters or shorter are returned
/// unchanged, whitespace included.
pub fn mask(value: &str) -> String {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len <= VISIBLE_SUFFIX {
        return value.to_string();
    }
    let suffix: String = trimmed.chars().skip(len - VISIBLE_SUFFIX).collect();
    format!("{MASK}{suffix}")
}
