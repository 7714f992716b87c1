//! Alignment entry types and the corrective-action table.
//!
//! This module provides:
//! - `AlignmentType`: the closed classification set
//! - `UserWord` / `ArticleWord`: per-side word references
//! - `EntryActions`: the accept/dismiss pair the UI offers
//! - `ComparisonEntry`: one classified position in the alignment

use serde::{Deserialize, Serialize};

/// Classification of one aligned position.
///
/// Exhaustive by construction; every consumer (action builder, stats,
/// serializer) matches all four cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentType {
    /// Transcript word equals the reference word at this position.
    Same,
    /// A reference word the learner skipped.
    Missing,
    /// A transcript word with no reference counterpart.
    Extra,
    /// Aligned words that differ (substitution).
    Replaced,
}

/// A word the learner typed, with its index into the transcript.
///
/// The index is nullable on the wire; the engine always fills it when
/// the word is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWord {
    pub user_word: String,
    pub user_index: Option<usize>,
}

/// A word from the reference article, with its index into the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleWord {
    pub article_word: String,
    pub article_index: Option<usize>,
}

/// Outcome of applying one corrective action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub result: String,
}

/// The two corrective choices offered for an entry.
///
/// Accept always moves the transcript toward the article; dismiss
/// always keeps what the learner actually typed (or removes a missing
/// placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryActions {
    pub accept: ActionResult,
    pub dismiss: ActionResult,
}

impl EntryActions {
    /// Derive the action pair from the entry's classification.
    ///
    /// | type     | accept         | dismiss         |
    /// |----------|----------------|-----------------|
    /// | Same     | the word       | the word        |
    /// | Missing  | article word   | empty string    |
    /// | Extra    | empty string   | transcript word |
    /// | Replaced | article word   | transcript word |
    pub fn build(
        kind: AlignmentType,
        user_word: Option<&UserWord>,
        article_word: Option<&ArticleWord>,
    ) -> Self {
        let user = user_word.map(|w| w.user_word.clone()).unwrap_or_default();
        let article = article_word
            .map(|w| w.article_word.clone())
            .unwrap_or_default();

        let (accept, dismiss) = match kind {
            AlignmentType::Same => (article.clone(), article),
            AlignmentType::Missing => (article, String::new()),
            AlignmentType::Extra => (String::new(), user),
            AlignmentType::Replaced => (article, user),
        };

        EntryActions {
            accept: ActionResult { result: accept },
            dismiss: ActionResult { result: dismiss },
        }
    }
}

/// One classified correspondence between a transcript position and/or
/// an article position.
///
/// `index_compared` is the entry's position in emission order, dense
/// from 0; it is not a word index on either side. `user_word` is null
/// for `Missing`, `article_word` is null for `Extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub index_compared: usize,
    #[serde(rename = "type")]
    pub kind: AlignmentType,
    pub user_word: Option<UserWord>,
    pub article_word: Option<ArticleWord>,
    pub actions: EntryActions,
}

impl ComparisonEntry {
    fn new(
        index_compared: usize,
        kind: AlignmentType,
        user_word: Option<UserWord>,
        article_word: Option<ArticleWord>,
    ) -> Self {
        let actions = EntryActions::build(kind, user_word.as_ref(), article_word.as_ref());
        ComparisonEntry {
            index_compared,
            kind,
            user_word,
            article_word,
            actions,
        }
    }

    /// Exact match: both sides carry the shared word.
    pub fn same(index_compared: usize, word: &str, user_index: usize, article_index: usize) -> Self {
        Self::new(
            index_compared,
            AlignmentType::Same,
            Some(UserWord {
                user_word: word.to_string(),
                user_index: Some(user_index),
            }),
            Some(ArticleWord {
                article_word: word.to_string(),
                article_index: Some(article_index),
            }),
        )
    }

    /// A skipped article word; no transcript side.
    pub fn missing(index_compared: usize, article_word: &str, article_index: usize) -> Self {
        Self::new(
            index_compared,
            AlignmentType::Missing,
            None,
            Some(ArticleWord {
                article_word: article_word.to_string(),
                article_index: Some(article_index),
            }),
        )
    }

    /// An inserted transcript word; no article side.
    pub fn extra(index_compared: usize, user_word: &str, user_index: usize) -> Self {
        Self::new(
            index_compared,
            AlignmentType::Extra,
            Some(UserWord {
                user_word: user_word.to_string(),
                user_index: Some(user_index),
            }),
            None,
        )
    }

    /// A substitution: both sides present, words differ.
    pub fn replaced(
        index_compared: usize,
        user_word: &str,
        user_index: usize,
        article_word: &str,
        article_index: usize,
    ) -> Self {
        Self::new(
            index_compared,
            AlignmentType::Replaced,
            Some(UserWord {
                user_word: user_word.to_string(),
                user_index: Some(user_index),
            }),
            Some(ArticleWord {
                article_word: article_word.to_string(),
                article_index: Some(article_index),
            }),
        )
    }
}
