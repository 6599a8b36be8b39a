//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum digits in a normalized number (excluding the leading `+`)
const MIN_DIGITS: usize = 8;

/// Maximum digits in a normalized number (excluding the leading `+`)
const MAX_DIGITS: usize = 16;

/// Normalized main number: a `+` followed by digits only
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]+$").expect("valid number pattern"));

/// Extension: digits only
static EXT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid ext pattern"));

/// A type-safe wrapper for phone numbers.
///
/// The raw text is validated and normalized at construction time into the
/// canonical form `+` followed by 8-16 digits, with an optional digit-only
/// extension taken from everything after the first `x` (case-insensitive).
/// The type exposes no mutators, so the invariants can never be violated
/// after construction.
///
/// # Example
///
/// ```
/// use domain_utils::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("8 (123) 456-78-90 x 001").unwrap();
/// assert_eq!(phone.number(), "+81234567890");
/// assert_eq!(phone.ext(), "001");
/// assert_eq!(phone.to_string(), "+81234567890x001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    number: String,
    ext: String,
}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the raw text.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty or whitespace-only
    /// - Everything after the first `x` or `X` is the extension (trimmed)
    /// - Whitespace, hyphens, and parentheses are stripped from the main part
    /// - A leading `+` is prepended if not already present
    /// - The normalized number must be `+` followed by 8-16 digits
    /// - The extension, when present, must be digits only
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` variant matching the first rule violated.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        // Split at the first case-insensitive 'x'; the right side is the extension.
        let (main_part, ext) = match raw.find(|c: char| c == 'x' || c == 'X') {
            Some(idx) => (&raw[..idx], raw[idx + 1..].trim()),
            None => (raw.as_str(), ""),
        };

        // Strip formatting characters from the main part.
        let mut number: String = main_part
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
            .collect();

        // Normalize to a leading '+'. Numbers with a domestic trunk prefix
        // (7 or 8) get the same treatment as everything else.
        if !number.starts_with('+') {
            number.insert(0, '+');
        }

        if !NUMBER_PATTERN.is_match(&number) {
            return Err(ValidationError::InvalidFormat(number));
        }

        // Leading '+' is guaranteed here, so every remaining char is a digit.
        let digit_count = number.len() - 1;
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digit_count) {
            return Err(ValidationError::InvalidLength(digit_count));
        }

        if !ext.is_empty() && !EXT_PATTERN.is_match(ext) {
            return Err(ValidationError::InvalidExtension(ext.to_string()));
        }

        tracing::debug!(number = %number, "parsed phone number");

        Ok(Self {
            number,
            ext: ext.to_string(),
        })
    }

    /// Get the normalized main number, including the leading `+`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Get the extension, or an empty string when there is none.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Whether this number carries an extension.
    pub fn has_ext(&self) -> bool {
        !self.ext.is_empty()
    }

    /// Get the main number with only digits (no leading `+`).
    pub fn digits_only(&self) -> &str {
        &self.number[1..]
    }
}

// Serde support - serialize as the display string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - number alone, or number + "x" + ext
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ext.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{}x{}", self.number, self.ext)
        }
    }
}
