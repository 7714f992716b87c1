//! Ordered word sequences, the engine's only input type.
//!
//! A `WordSequence` is the already-tokenized form of a text: the
//! upstream segmentation service splits raw text into words and hands
//! the engine two of these (the reference article and the learner's
//! transcript). The engine never re-tokenizes or normalizes.

use serde::{Deserialize, Serialize};

/// An immutable, 0-indexed list of UTF-8 word tokens.
///
/// Insertion order is the reading order of the text. Serializes as a
/// plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Create a sequence from already-split word tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSequence {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw text on runs of whitespace.
    ///
    /// This is the caller-side tokenization described by the input
    /// contract: empty or all-whitespace text yields an empty
    /// sequence, never an error.
    pub fn from_text(text: &str) -> Self {
        WordSequence {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Word at position `index`, or None past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the sequence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Single-space concatenation of all words.
    ///
    /// Used by the exact-match fast path to compare both sides in one
    /// pass.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }

    /// Borrow the underlying word slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordSequence {
    fn from(words: Vec<String>) -> Self {
        WordSequence { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_on_whitespace_runs() {
        let seq = WordSequence::from_text("the  quick\tbrown\n fox");
        assert_eq!(
            seq.as_slice(),
            &["the", "quick", "brown", "fox"].map(String::from)
        );
    }

    #[test]
    fn test_from_text_empty_and_blank() {
        assert!(WordSequence::from_text("").is_empty());
        assert!(WordSequence::from_text("   \t\n  ").is_empty());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let seq = WordSequence::from_words(["a", "b"]);
        assert_eq!(seq.get(1), Some("b"));
        assert_eq!(seq.get(2), None);
    }

    #[test]
    fn test_joined_uses_single_spaces() {
        let seq = WordSequence::from_text("one\ttwo   three");
        assert_eq!(seq.joined(), "one two three");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = WordSequence::from_words(["你好", "世界"]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"["你好","世界"]"#);
    }
}
