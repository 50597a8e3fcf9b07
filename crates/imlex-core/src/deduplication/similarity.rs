//! Similarity scoring for near-duplicate keys

use rapidfuzz::fuzz;

use super::scan::Candidate;

/// Normalized indel similarity between two canonical keys, in [0, 1].
///
/// 1.0 means identical; symmetric in its arguments. 0.90 catches
/// "dog" vs "dogs"; 0.85 starts catching "my books" vs "our books".
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars())
}

/// Outcome of judging an anchor against one of its sorted successors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Judgment {
    /// Not similar enough; move on.
    Distinct,
    /// Same canonical key; the neighbor loses.
    ExactDropNeighbor,
    /// Same canonical key but the neighbor has the longer surface form;
    /// the anchor loses and its scan ends.
    ExactDropAnchor,
    /// Distinct keys within the threshold; the neighbor always loses.
    FuzzyDropNeighbor(f64),
}

/// Decide whether two candidates duplicate each other and which survives.
///
/// Exact key matches keep the longer original text (it usually carries
/// the better punctuation), ties keep the anchor. Fuzzy matches keep the
/// anchor, i.e. the record earlier in scan order.
pub(crate) fn judge(anchor: &Candidate, neighbor: &Candidate, threshold: f64) -> Judgment {
    if anchor.key == neighbor.key {
        if anchor.text.chars().count() >= neighbor.text.chars().count() {
            Judgment::ExactDropNeighbor
        } else {
            Judgment::ExactDropAnchor
        }
    } else {
        let ratio = similarity_ratio(&anchor.key, &neighbor.key);
        if ratio >= threshold {
            Judgment::FuzzyDropNeighbor(ratio)
        } else {
            Judgment::Distinct
        }
    }
}
