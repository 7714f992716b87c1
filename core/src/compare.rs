//! The comparison engine: exact-match fast path, greedy alignment
//! core, and the top-level `compare` entry point.
//!
//! The aligner is a greedy two-cursor loop with a single word of
//! lookahead on each side. It resolves single-word insertions and
//! deletions, but runs of consecutive insertions, deletions, or
//! substitutions degrade to per-word `Replaced` entries once both
//! lookahead checks fail. That is the contract: downstream accuracy
//! history depends on this exact classification, so it must not be
//! swapped for a minimum-edit-distance (DP/Myers) alignment, and
//! consecutive `Replaced` entries are never merged.

use crate::entry::ComparisonEntry;
use crate::sequence::WordSequence;
use crate::stats::ComparisonStats;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The full outcome of one comparison call.
///
/// Immutable once built; the engine keeps no state between calls.
/// Serializes to the wire document consumed by the UI and accuracy
/// history (`user_words`, `article_words`, `comparison`, `stats`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub user_words: WordSequence,
    pub article_words: WordSequence,
    pub comparison: Vec<ComparisonEntry>,
    pub stats: ComparisonStats,
}

impl ComparisonResult {
    /// Encode as a compact JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode as a pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Compare the learner's transcript against the reference article.
///
/// Total over any two finite sequences, including empty ones; never
/// panics. Each entry carries a dense `index_compared`, its
/// classification, the word reference(s) involved, and the
/// accept/dismiss action pair. At most `m + n` entries are produced.
pub fn compare(user_words: WordSequence, article_words: WordSequence) -> ComparisonResult {
    debug!(
        user_len = user_words.len(),
        article_len = article_words.len(),
        "comparing word sequences"
    );

    // Joined-string equality is the fast-path gate. Tokens are
    // whitespace-delimited and so never contain spaces themselves,
    // which makes joined equality equivalent to element-wise
    // equality here.
    let comparison = if user_words.joined() == article_words.joined() {
        trace!("sequences identical, taking exact-match fast path");
        exact_match_entries(&user_words, &article_words)
    } else {
        greedy_align(&user_words, &article_words)
    };

    let stats = ComparisonStats::tally(&comparison);
    debug!(
        same = stats.same,
        missing = stats.missing,
        extra = stats.extra,
        replaced = stats.replaced,
        "comparison finished"
    );

    ComparisonResult {
        user_words,
        article_words,
        comparison,
        stats,
    }
}

/// All-`Same` alignment for identical sequences.
///
/// Output is shape-identical to what the greedy core would produce
/// for equal inputs, so the fast path is transparent to callers.
fn exact_match_entries(user: &WordSequence, article: &WordSequence) -> Vec<ComparisonEntry> {
    user.iter()
        .zip(article.iter())
        .enumerate()
        .map(|(k, (_, article_word))| ComparisonEntry::same(k, article_word, k, k))
        .collect()
}

/// The greedy two-cursor, single-lookahead classification loop.
///
/// Rule priority per iteration (first match wins):
/// 1. current words equal            -> Same,     advance both
/// 2. user word equals next article  -> Missing,  advance article only
/// 3. next user word equals article  -> Extra,    advance user only
/// 4. both in range, neither matched -> Replaced, advance both
/// 5. article exhausted              -> Extra,    advance user
/// 6. user exhausted                 -> Missing,  advance article
///
/// Every branch advances `i + j` by at least one, so the loop runs at
/// most `m + n` iterations, emitting one entry each.
fn greedy_align(user: &WordSequence, article: &WordSequence) -> Vec<ComparisonEntry> {
    let m = user.len();
    let n = article.len();
    let mut entries = Vec::with_capacity(m.max(n));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < m || j < n {
        let u = user.get(i);
        let r = article.get(j);
        let next_user = user.get(i + 1);
        let next_article = article.get(j + 1);
        let index = entries.len();

        match (u, r) {
            (Some(u), Some(r)) if u == r => {
                entries.push(ComparisonEntry::same(index, r, i, j));
                i += 1;
                j += 1;
            }
            (_, Some(r)) if u == next_article => {
                // The learner skipped the article word at j; the
                // current transcript word lines up with the next
                // article word, so only the article cursor moves.
                entries.push(ComparisonEntry::missing(index, r, j));
                j += 1;
            }
            (Some(u), _) if next_user == r => {
                // The learner inserted a word; the next transcript
                // word lines up with the current article word.
                entries.push(ComparisonEntry::extra(index, u, i));
                i += 1;
            }
            (Some(u), Some(r)) => {
                entries.push(ComparisonEntry::replaced(index, u, i, r, j));
                i += 1;
                j += 1;
            }
            (Some(u), None) => {
                // Article exhausted; everything left is extra.
                entries.push(ComparisonEntry::extra(index, u, i));
                i += 1;
            }
            (None, Some(r)) => {
                // Transcript exhausted; everything left is missing.
                entries.push(ComparisonEntry::missing(index, r, j));
                j += 1;
            }
            (None, None) => unreachable!("loop guard requires i < m or j < n"),
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::AlignmentType;

    fn seq(words: &[&str]) -> WordSequence {
        WordSequence::from_words(words.iter().copied())
    }

    fn kinds(result: &ComparisonResult) -> Vec<AlignmentType> {
        result.comparison.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_identical_sequences_all_same() {
        let result = compare(seq(&["the", "cat", "sat"]), seq(&["the", "cat", "sat"]));
        assert_eq!(
            kinds(&result),
            vec![AlignmentType::Same, AlignmentType::Same, AlignmentType::Same]
        );
        assert_eq!(result.stats.same, 3);
        assert_eq!(result.stats.total(), 3);
        for (k, entry) in result.comparison.iter().enumerate() {
            assert_eq!(entry.index_compared, k);
            let user = entry.user_word.as_ref().unwrap();
            let article = entry.article_word.as_ref().unwrap();
            assert_eq!(user.user_index, Some(k));
            assert_eq!(article.article_index, Some(k));
            assert_eq!(entry.actions.accept.result, entry.actions.dismiss.result);
        }
    }

    #[test]
    fn test_skipped_word_classified_missing() {
        let result = compare(seq(&["cat", "sat"]), seq(&["the", "cat", "sat"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Missing,
                AlignmentType::Same,
                AlignmentType::Same
            ]
        );
        let missing = &result.comparison[0];
        assert!(missing.user_word.is_none());
        let article = missing.article_word.as_ref().unwrap();
        assert_eq!(article.article_word, "the");
        assert_eq!(article.article_index, Some(0));
        assert_eq!(result.stats.missing, 1);
        assert_eq!(result.stats.same, 2);
    }

    #[test]
    fn test_inserted_word_classified_extra() {
        let result = compare(seq(&["the", "big", "cat"]), seq(&["the", "cat"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Same,
                AlignmentType::Extra,
                AlignmentType::Same
            ]
        );
        let extra = &result.comparison[1];
        assert!(extra.article_word.is_none());
        let user = extra.user_word.as_ref().unwrap();
        assert_eq!(user.user_word, "big");
        assert_eq!(user.user_index, Some(1));
        assert_eq!(result.stats.extra, 1);
        assert_eq!(result.stats.same, 2);
    }

    #[test]
    fn test_single_substitution_classified_replaced() {
        let result = compare(seq(&["dog"]), seq(&["cat"]));
        assert_eq!(kinds(&result), vec![AlignmentType::Replaced]);
        let entry = &result.comparison[0];
        assert_eq!(entry.user_word.as_ref().unwrap().user_word, "dog");
        assert_eq!(entry.article_word.as_ref().unwrap().article_word, "cat");
        assert_eq!(entry.actions.accept.result, "cat");
        assert_eq!(entry.actions.dismiss.result, "dog");
        assert_eq!(result.stats.replaced, 1);
    }

    #[test]
    fn test_empty_transcript_all_missing() {
        let result = compare(WordSequence::default(), seq(&["hello"]));
        assert_eq!(kinds(&result), vec![AlignmentType::Missing]);
        assert_eq!(result.stats.missing, 1);
    }

    #[test]
    fn test_empty_article_all_extra() {
        let result = compare(seq(&["hello"]), WordSequence::default());
        assert_eq!(kinds(&result), vec![AlignmentType::Extra]);
        assert_eq!(result.stats.extra, 1);
    }

    #[test]
    fn test_both_empty() {
        let result = compare(WordSequence::default(), WordSequence::default());
        assert!(result.comparison.is_empty());
        assert_eq!(result.stats.total(), 0);
    }

    #[test]
    fn test_trailing_extra_words() {
        let result = compare(seq(&["a", "b", "c", "d"]), seq(&["a", "b"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Same,
                AlignmentType::Same,
                AlignmentType::Extra,
                AlignmentType::Extra
            ]
        );
    }

    #[test]
    fn test_trailing_missing_words() {
        let result = compare(seq(&["a"]), seq(&["a", "b", "c"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Same,
                AlignmentType::Missing,
                AlignmentType::Missing
            ]
        );
    }

    // Window-1 lookahead: a two-word gap is past the lookahead, so
    // the first mismatch lands as Replaced rather than two Missing
    // entries. Locked in so nobody "fixes" the heuristic.
    #[test]
    fn test_two_word_gap_degrades_to_replaced() {
        let result = compare(seq(&["a", "d"]), seq(&["a", "b", "c", "d"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Same,
                AlignmentType::Replaced,
                AlignmentType::Missing,
                AlignmentType::Missing
            ]
        );
        assert_eq!(
            result.comparison[1].user_word.as_ref().unwrap().user_word,
            "d"
        );
        assert_eq!(
            result.comparison[1]
                .article_word
                .as_ref()
                .unwrap()
                .article_word,
            "b"
        );
    }

    #[test]
    fn test_consecutive_substitutions_stay_per_word() {
        let result = compare(seq(&["a", "x", "y", "d"]), seq(&["a", "b", "c", "d"]));
        assert_eq!(
            kinds(&result),
            vec![
                AlignmentType::Same,
                AlignmentType::Replaced,
                AlignmentType::Replaced,
                AlignmentType::Same
            ]
        );
    }

    #[test]
    fn test_index_compared_dense_and_bounded() {
        let result = compare(
            seq(&["the", "quick", "brown", "fox"]),
            seq(&["the", "slow", "brown", "dog", "runs"]),
        );
        for (k, entry) in result.comparison.iter().enumerate() {
            assert_eq!(entry.index_compared, k);
        }
        assert!(result.comparison.len() <= 4 + 5);
    }

    #[test]
    fn test_sequence_length_invariants() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["cat", "sat"], &["the", "cat", "sat"]),
            (&["the", "big", "cat"], &["the", "cat"]),
            (&["dog"], &["cat"]),
            (&["a", "x", "y", "d"], &["a", "b", "c", "d"]),
            (&[], &["hello"]),
            (&["hello"], &[]),
            (&[], &[]),
        ];
        for (user, article) in cases {
            let result = compare(seq(user), seq(article));
            let s = result.stats;
            assert_eq!(s.same + s.replaced + s.missing, article.len());
            assert_eq!(s.same + s.replaced + s.extra, user.len());
            assert_eq!(s.total(), result.comparison.len());
        }
    }
}
