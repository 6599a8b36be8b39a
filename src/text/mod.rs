//! Text analysis utilities.

pub mod analyzer;

pub use analyzer::{count_consonants, split_into_words};
