use crate::pair::{NewSentencePair, SentencePair};

/// The trait that sentence storage backends implement.
pub trait SentenceStore: Send + Sync {
    /// Load every stored pair, ordered by id.
    fn load_pairs(&self) -> Result<Vec<SentencePair>, StoreError>;

    /// Count stored pairs without fetching them.
    fn count(&self) -> Result<usize, StoreError>;

    /// Insert multiple pairs atomically. Returns the assigned ids.
    fn insert_batch(&self, pairs: Vec<NewSentencePair>) -> Result<Vec<i64>, StoreError>;

    /// Delete every pair whose id is in `ids`, in chunks bounded by the
    /// backend's parameter ceiling. Absent ids are skipped, so retrying
    /// after a partial failure is a no-op for rows already removed.
    /// Returns the number of rows actually deleted.
    fn delete_ids(&self, ids: &[i64]) -> Result<usize, StoreError>;

    /// Reclaim file space after a large deletion.
    fn vacuum(&self) -> Result<(), StoreError>;
}

/// Errors from the sentence store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be opened or read; nothing was computed or mutated.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// A deletion chunk failed mid-batch. Chunks already applied stay
    /// applied; `remaining` lists the ids not yet confirmed deleted so
    /// the caller can retry.
    #[error("Deletion incomplete: {deleted} rows removed, {} ids unconfirmed ({reason})", remaining.len())]
    PartialDeletion {
        deleted: usize,
        remaining: Vec<i64>,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::Unavailable("open sentences.db: locked".into());
        assert!(err.to_string().contains("sentences.db"));

        let err = StoreError::PartialDeletion {
            deleted: 900,
            remaining: vec![901, 902],
            reason: "disk I/O error".into(),
        };
        let text = err.to_string();
        assert!(text.contains("900 rows removed"));
        assert!(text.contains("2 ids unconfirmed"));
    }
}
