//! Duplicate detection and pruning for sentence pairs
//!
//! Normalizes the English text to a canonical comparison key, sorts the
//! records so near-duplicates become neighbors, scans a bounded window of
//! successors per record, and accumulates a deterministic deletion set.

mod normalization;
mod orchestration;
mod scan;
mod similarity;

pub use normalization::canonical_key;
pub use orchestration::{prune_duplicates, PruneSummary};
pub use scan::{scan_for_duplicates, DuplicateMatch, MatchKind, PruneConfig, PrunePlan};
pub use similarity::similarity_ratio;
