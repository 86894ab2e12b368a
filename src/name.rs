//! The validated name shared by categories and items.

use std::fmt::Display;

use unicode_segmentation::UnicodeSegmentation;

/// The fewest characters a name may have after trimming.
pub const NAME_MIN_LENGTH: usize = 3;
/// The most characters a name may have after trimming.
pub const NAME_MAX_LENGTH: usize = 100;

/// Why a string could not be used as a [Name].
///
/// The messages are phrased to follow the kind of name, e.g.
/// "Category name must contain at least 3 characters".
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// Fewer than [NAME_MIN_LENGTH] characters remain after trimming.
    #[error("must contain at least {} characters", NAME_MIN_LENGTH)]
    TooShort,
    /// More than [NAME_MAX_LENGTH] characters remain after trimming.
    #[error("must contain at most {} characters", NAME_MAX_LENGTH)]
    TooLong,
}

/// A trimmed name between [NAME_MIN_LENGTH] and [NAME_MAX_LENGTH] characters long.
///
/// Length is measured in grapheme clusters so that "café" counts as four
/// characters however it is encoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a name from user input.
    ///
    /// # Errors
    ///
    /// Returns a [NameError] if the trimmed `name` is too short or too long.
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        let length = name.graphemes(true).count();

        if length < NAME_MIN_LENGTH {
            Err(NameError::TooShort)
        } else if length > NAME_MAX_LENGTH {
            Err(NameError::TooLong)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a name without validation.
    ///
    /// The caller should ensure the name satisfies the length constraints, e.g. because it was
    /// read back from the database.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Whether two names are equal ignoring case.
    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod name_tests {
    use super::{NAME_MAX_LENGTH, Name, NameError};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(Name::new(""), Err(NameError::TooShort));
    }

    #[test]
    fn new_fails_on_short_string_after_trimming() {
        assert_eq!(Name::new("  ab \n"), Err(NameError::TooShort));
    }

    #[test]
    fn new_fails_on_long_string() {
        let name = "a".repeat(NAME_MAX_LENGTH + 1);

        assert_eq!(Name::new(&name), Err(NameError::TooLong));
    }

    #[test]
    fn new_accepts_boundary_lengths() {
        assert!(Name::new("abc").is_ok());
        assert!(Name::new(&"a".repeat(NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn new_trims_whitespace() {
        let name = Name::new("  Sci-Fi\t").unwrap();

        assert_eq!(name.as_ref(), "Sci-Fi");
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        // Three emoji are twelve bytes but only three characters.
        assert!(Name::new("🔥🔥🔥").is_ok());
        assert_eq!(Name::new("🔥🔥"), Err(NameError::TooShort));
    }

    #[test]
    fn eq_ignore_case() {
        let a = Name::new_unchecked("Sci-Fi");
        let b = Name::new_unchecked("sci-fi");
        let c = Name::new_unchecked("Fantasy");

        assert!(a.eq_ignore_case(&b));
        assert!(!a.eq_ignore_case(&c));
    }

    #[test]
    fn error_message_reads_as_a_sentence() {
        let message = format!("Category name {}", NameError::TooShort);

        assert_eq!(message, "Category name must contain at least 3 characters");
    }
}
