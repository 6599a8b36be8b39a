//! Word tokenization and consonant counting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Latin consonant letters, both cases
const LATIN_CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXZbcdfghjklmnpqrstvwxz";

/// Cyrillic consonant letters, both cases
const CYRILLIC_CONSONANTS: &str = "БВГДЖЗЙКЛМНПРСТФХЦЧШЩбвгджзйклмнпрстфхцчшщ";

/// A word: letter runs optionally joined by a single hyphen or apostrophe
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}+(?:[-']\p{L}+)*").expect("valid word pattern"));

/// Split text into words in left-to-right order of appearance.
///
/// A word is a maximal run of letters (any script), optionally joined by
/// a single hyphen or apostrophe between letter runs, so "mother-in-law"
/// and "don't" are single words. Empty input yields an empty vec.
///
/// # Example
///
/// ```
/// use domain_utils::text::split_into_words;
///
/// let words = split_into_words("Don't say mother-in-law!");
/// assert_eq!(words, vec!["Don't", "say", "mother-in-law"]);
/// ```
pub fn split_into_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count the consonant letters in the text.
///
/// Counts characters that are consonants in the Latin or Cyrillic
/// alphabet, either case. Vowels, digits, punctuation, and characters
/// outside the two alphabets are ignored, so input without any supported
/// consonant yields 0.
pub fn count_consonants(text: &str) -> usize {
    text.chars().filter(|c| is_consonant(*c)).count()
}

/// Membership test against the fixed consonant sets.
fn is_consonant(c: char) -> bool {
    LATIN_CONSONANTS.contains(c) || CYRILLIC_CONSONANTS.contains(c)
}
