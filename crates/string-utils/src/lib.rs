//! Small pure string helpers.
//!
//! The crate has no I/O and no runtime dependencies. It offers two
//! operations over Unicode scalar values:
//!
//! - [`is_valid_anagram`] checks whether two strings hold the same multiset
//!   of characters.
//! - [`letter_count`] builds a frequency map of every character in a string.
//!
//! Characters are compared by exact identity. Nothing is case folded,
//! normalised, or filtered, so whitespace and punctuation count like any
//! other character.
//!
//! # Example
//!
//! ```
//! use string_utils::{is_valid_anagram, letter_count};
//!
//! assert!(is_valid_anagram("listen", "silent"));
//! assert_eq!(letter_count("cat").get(&'c'), Some(&1));
//! ```

mod anagram;
mod letter_count;

pub use anagram::is_valid_anagram;
pub use letter_count::{LetterCounts, letter_count};
