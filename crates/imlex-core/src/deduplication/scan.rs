//! Sorted bounded-window duplicate scan

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::normalization::canonical_key;
use super::similarity::{judge, Judgment};
use crate::error::ConfigError;

/// Tunables for a pruning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Sorted successors examined per anchor.
    pub window_size: usize,
    /// Minimum similarity ratio for a fuzzy match, in [0, 1].
    pub similarity_threshold: f64,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            similarity_threshold: 0.90,
        }
    }
}

impl PruneConfig {
    /// Reject out-of-range settings before any record is read.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.similarity_threshold));
        }
        if self.window_size == 0 {
            return Err(ConfigError::WindowTooSmall);
        }
        Ok(())
    }
}

/// One record in the pass: the stored row projected onto what the scan
/// needs, plus its canonical key. Built once at pass start, immutable,
/// discarded when the pass ends.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) id: i64,
    pub(crate) text: String,
    pub(crate) key: String,
}

/// How a match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// A judged duplicate: which row survives, which is removed, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    pub kept_id: i64,
    pub kept_text: String,
    pub removed_id: i64,
    pub removed_text: String,
    pub kind: MatchKind,
    /// Similarity ratio of the canonical keys; 1.0 for exact matches.
    pub score: f64,
}

/// Output of the scan: the audit trail and the ids to remove.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrunePlan {
    /// Every judged duplicate, in scan order.
    pub matches: Vec<DuplicateMatch>,
    to_delete: BTreeSet<i64>,
}

impl PrunePlan {
    /// Ids marked for removal, ascending.
    pub fn ids(&self) -> &BTreeSet<i64> {
        &self.to_delete
    }

    pub fn len(&self) -> usize {
        self.to_delete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
    }

    /// Mark `removed` for deletion. Insertion is idempotent and nothing
    /// ever leaves the set within a pass.
    fn record(&mut self, kept: &Candidate, removed: &Candidate, kind: MatchKind, score: f64) {
        if self.to_delete.insert(removed.id) {
            self.matches.push(DuplicateMatch {
                kept_id: kept.id,
                kept_text: kept.text.clone(),
                removed_id: removed.id,
                removed_text: removed.text.clone(),
                kind,
                score,
            });
        }
    }
}

/// Scan `(id, english_text)` rows for exact and near duplicates.
///
/// Sorting by canonical key clusters duplicates into a small
/// neighborhood, so one O(n log n) sort plus a bounded window per record
/// replaces the all-pairs comparison. Pairs whose keys are not
/// lexicographically close stay undetected; that is the window
/// trade-off, not a failure.
pub fn scan_for_duplicates(
    rows: impl IntoIterator<Item = (i64, String)>,
    config: &PruneConfig,
) -> Result<PrunePlan, ConfigError> {
    config.validate()?;

    let mut candidates: Vec<Candidate> = rows
        .into_iter()
        .map(|(id, text)| {
            let key = canonical_key(&text);
            Candidate { id, text, key }
        })
        .collect();

    // Total order: key ascending, ties by id, so reruns are reproducible.
    candidates.sort_by(|a, b| a.key.cmp(&b.key).then(a.id.cmp(&b.id)));

    let mut plan = PrunePlan::default();

    for i in 0..candidates.len() {
        let anchor = &candidates[i];
        if plan.to_delete.contains(&anchor.id) {
            continue;
        }

        for j in 1..=config.window_size {
            let Some(neighbor) = candidates.get(i + j) else {
                break;
            };
            if plan.to_delete.contains(&neighbor.id) {
                continue;
            }

            match judge(anchor, neighbor, config.similarity_threshold) {
                Judgment::Distinct => {}
                Judgment::ExactDropNeighbor => {
                    plan.record(anchor, neighbor, MatchKind::Exact, 1.0);
                }
                Judgment::ExactDropAnchor => {
                    // The anchor itself lost; nothing left to compare.
                    plan.record(neighbor, anchor, MatchKind::Exact, 1.0);
                    break;
                }
                Judgment::FuzzyDropNeighbor(score) => {
                    plan.record(anchor, neighbor, MatchKind::Fuzzy, score);
                }
            }
        }
    }

    Ok(plan)
}
