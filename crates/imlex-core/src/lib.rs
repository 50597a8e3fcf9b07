//! imlex-core: Near-duplicate detection and pruning for sentence libraries.
//!
//! This library decides which Turkish-English sentence pairs are exact or
//! near-duplicates of another pair and computes a minimal, deterministic
//! set of ids to remove:
//! - Canonical-key normalization of the English text
//! - Sort-based clustering plus a bounded-window neighbor scan
//! - Two-tier similarity decision (exact key match vs. fuzzy ratio)
//! - Pass orchestration against an `imlex-store` backend, gated by an
//!   injected confirmation function
//!
//! Persistence lives in `imlex-store`; this crate only decides.

pub mod deduplication;
pub mod error;

pub use deduplication::{
    canonical_key, prune_duplicates, scan_for_duplicates, similarity_ratio, DuplicateMatch,
    MatchKind, PruneConfig, PrunePlan, PruneSummary,
};
pub use error::{ConfigError, PruneError, Result};
