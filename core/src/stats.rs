//! Per-classification tallies over a finished alignment.

use crate::entry::{AlignmentType, ComparisonEntry};
use serde::{Deserialize, Serialize};

/// One count per `AlignmentType`; absent types are 0.
///
/// For every valid comparison: `same + replaced + missing` equals the
/// article length and `same + replaced + extra` equals the transcript
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub same: usize,
    pub missing: usize,
    pub extra: usize,
    pub replaced: usize,
}

impl ComparisonStats {
    /// Tally the entries of a finished alignment.
    pub fn tally(entries: &[ComparisonEntry]) -> Self {
        let mut stats = ComparisonStats::default();
        for entry in entries {
            stats.record(entry.kind);
        }
        stats
    }

    /// Bump the count for one classification.
    pub fn record(&mut self, kind: AlignmentType) {
        match kind {
            AlignmentType::Same => self.same += 1,
            AlignmentType::Missing => self.missing += 1,
            AlignmentType::Extra => self.extra += 1,
            AlignmentType::Replaced => self.replaced += 1,
        }
    }

    /// Count for one classification.
    pub fn count(&self, kind: AlignmentType) -> usize {
        match kind {
            AlignmentType::Same => self.same,
            AlignmentType::Missing => self.missing,
            AlignmentType::Extra => self.extra,
            AlignmentType::Replaced => self.replaced,
        }
    }

    /// Total entries, equal to the alignment length.
    pub fn total(&self) -> usize {
        self.same + self.missing + self.extra + self.replaced
    }

    /// Fraction of entries classified `Same`, in 0.0..=1.0.
    ///
    /// This is the ratio downstream accuracy consumers compute; an
    /// empty comparison scores 1.0 (nothing to get wrong).
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            1.0
        } else {
            self.same as f64 / total as f64
        }
    }
}
