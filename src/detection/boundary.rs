//! Token-boundary matching discipline
//!
//! The regex engine used here is a linear-time automaton and has no
//! lookaround, so patterns cannot express "not embedded in a longer
//! word" themselves. Both the detector and the leak verifier apply this
//! check instead: a span counts as a whole token only when the characters
//! adjacent to it (if any) are non-word characters.
//!
//! Without this, a national-ID pattern would fire inside a longer digit
//! run, and the verifier would report a leak for a redacted number that
//! merely appears as a substring of an unrelated larger one.

/// Check whether a character belongs to a word run (`\w` semantics)
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check whether `[start, end)` is bounded by non-word characters or edges
///
/// `start` and `end` must be valid char boundaries in `text`.
pub fn is_token_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}
