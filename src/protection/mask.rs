//! Masking: length-preserving partial obfuscation

use super::unique_values_longest_first;
use crate::domain::finding::FindingSet;

/// Mask a single value while keeping a short prefix/suffix readable
///
/// Values of four characters or fewer are masked entirely; longer values
/// keep their first two and last two characters. The output always has
/// the same character count as the input.
pub fn mask_value(value: &str, mask_char: char) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return std::iter::repeat(mask_char).take(chars.len()).collect();
    }

    let mut masked = String::with_capacity(value.len());
    masked.extend(&chars[..2]);
    masked.extend(std::iter::repeat(mask_char).take(chars.len() - 4));
    masked.extend(&chars[chars.len() - 2..]);
    masked
}

/// Mask every occurrence of every detected value in the text
///
/// Same traversal and longest-first ordering as redaction. Never fails.
pub fn mask_text(text: &str, findings: &FindingSet, mask_char: char) -> String {
    let mut output = text.to_string();
    for value in unique_values_longest_first(findings) {
        let masked = mask_value(&value, mask_char);
        output = output.replace(&value, &masked);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finding::{EntityKind, Finding};
    use test_case::test_case;

    #[test_case("0712345678", "07******78" ; "phone keeps prefix and suffix")]
    #[test_case("abcd", "****" ; "short value fully masked")]
    #[test_case("ab", "**" ; "very short value fully masked")]
    #[test_case("abcde", "ab*de" ; "five chars masks only middle")]
    fn test_mask_value(input: &str, expected: &str) {
        assert_eq!(mask_value(input, '*'), expected);
    }

    #[test]
    fn test_mask_preserves_length() {
        for value in ["x", "abcd", "0712345678", "A123456789B", "person@example.org"] {
            assert_eq!(
                mask_value(value, '*').chars().count(),
                value.chars().count()
            );
        }
    }

    #[test]
    fn test_mask_text_replaces_all_occurrences() {
        let mut findings = FindingSet::new();
        findings.push(Finding::new(EntityKind::Phone, "0712345678", 0, 10, 0.9));

        let masked = mask_text("0712345678 and 0712345678", &findings, '*');
        assert_eq!(masked, "07******78 and 07******78");
    }

    #[test]
    fn test_custom_mask_char() {
        assert_eq!(mask_value("abcdef", '#'), "ab##ef");
    }
}
