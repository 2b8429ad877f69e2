//! Endpoint URL normalization.
//!
//! One observed bootstrap encoding wraps URL fragments in single quotes
//! joined by a literal `'+'` marker (e.g. `"part1'+'part2"`), emitted to
//! survive a string-escaping step upstream. Contract: split on the
//! marker, strip residual single quotes from each segment, rejoin.
//! Strings without the marker pass through untouched.

/// Marker indicating a quoted-concatenation URL.
const CONCAT_MARKER: &str = "'+'";

/// Normalize a bootstrap URL attribute into a fetchable URL.
pub fn normalize_url(raw: &str) -> String {
    if !raw.contains(CONCAT_MARKER) {
        return raw.to_string();
    }
    raw.split(CONCAT_MARKER)
        .map(|segment| segment.replace('\'', ""))
        .collect::<Vec<_>>()
        .join("")
}
