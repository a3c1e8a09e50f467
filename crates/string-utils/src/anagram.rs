//! Anagram detection.

use crate::letter_count::letter_count;

/// Return `true` when `first` and `second` contain exactly the same
/// characters with the same multiplicities.
///
/// Comparison is case and whitespace sensitive. Strings of different length
/// are rejected before any counting happens.
///
/// # Examples
///
/// ```
/// use string_utils::is_valid_anagram;
///
/// assert!(is_valid_anagram("listen", "silent"));
/// assert!(!is_valid_anagram("elbows", "below"));
/// assert!(!is_valid_anagram("night", "thingy"));
/// ```
#[must_use]
pub fn is_valid_anagram(first: &str, second: &str) -> bool {
    // Equal multisets always encode to the same number of UTF-8 bytes.
    if first.len() != second.len() {
        return false;
    }

    let mut remaining = letter_count(first);
    for character in second.chars() {
        match remaining.get_mut(&character) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}
