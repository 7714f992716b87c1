//! retype-core
//!
//! Word-level comparison engine for retyping practice: a learner
//! retypes a reference article and gets per-word feedback on accuracy.
//!
//! Given two already-tokenized word sequences (the reference article
//! and the learner's transcript), the engine produces an ordered,
//! exhaustively classified alignment (same / missing / extra /
//! replaced), the accept/dismiss corrective action pair for each
//! position, and per-classification counts. Tokenization and storage
//! are external collaborators; the engine is a pure, stateless
//! function over its inputs.
//!
//! Public API:
//! - `WordSequence` - Immutable, 0-indexed word list
//! - `compare` - The total comparison entry point
//! - `ComparisonResult` - Entries, stats, and the JSON wire document
//! - `ComparisonEntry` / `AlignmentType` - One classified position
//! - `ComparisonStats` - Per-classification tallies

pub mod sequence;
pub use sequence::WordSequence;

pub mod entry;
pub use entry::{ActionResult, AlignmentType, ArticleWord, ComparisonEntry, EntryActions, UserWord};

pub mod stats;
pub use stats::ComparisonStats;

pub mod compare;
pub use compare::{compare, ComparisonResult};
