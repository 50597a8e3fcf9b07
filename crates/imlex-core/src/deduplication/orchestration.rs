//! Pass orchestration: load, plan, confirm, delete
//!
//! The confirmation gate is an injected decision function so callers can
//! wire up a console prompt, a policy, or an auto-approve in tests. The
//! store is only mutated after the gate approves a non-empty plan.

use serde::Serialize;
use tracing::{debug, info, warn};

use imlex_store::SentenceStore;

use super::scan::{scan_for_duplicates, PruneConfig, PrunePlan};
use crate::error::Result;

/// Result of one full pruning pass.
#[derive(Debug, Clone, Serialize)]
pub struct PruneSummary {
    /// Records loaded from the store.
    pub scanned: usize,
    /// The computed plan, kept for auditing even when nothing was removed.
    pub plan: PrunePlan,
    /// Whether the confirmation gate approved the deletion.
    pub confirmed: bool,
    /// Rows actually removed by the store.
    pub deleted: usize,
}

/// Run one pruning pass against a sentence store.
///
/// Validates the configuration before touching the store, loads every
/// pair in one full-scan read, scans the English side for duplicates,
/// and hands the resulting plan to `confirm`. An empty collection or an
/// empty plan completes immediately; a rejected confirmation aborts with
/// zero side effects.
pub fn prune_duplicates<S, F>(store: &S, config: &PruneConfig, confirm: F) -> Result<PruneSummary>
where
    S: SentenceStore + ?Sized,
    F: FnOnce(&PrunePlan) -> bool,
{
    config.validate()?;

    let pairs = store.load_pairs()?;
    let scanned = pairs.len();
    info!(scanned, "loaded sentence pairs");

    let plan = scan_for_duplicates(pairs.into_iter().map(|p| (p.id, p.english_text)), config)?;

    if plan.is_empty() {
        debug!("no duplicates within the current window and threshold");
        return Ok(PruneSummary {
            scanned,
            plan,
            confirmed: false,
            deleted: 0,
        });
    }

    if !confirm(&plan) {
        warn!(pending = plan.len(), "deletion not confirmed, store untouched");
        return Ok(PruneSummary {
            scanned,
            plan,
            confirmed: false,
            deleted: 0,
        });
    }

    let ids: Vec<i64> = plan.ids().iter().copied().collect();
    let deleted = store.delete_ids(&ids)?;
    info!(deleted, "prune pass complete");

    Ok(PruneSummary {
        scanned,
        plan,
        confirmed: true,
        deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PruneError;
    use imlex_store::{NewSentencePair, SentencePair, StoreError};

    /// Store stub whose reads always fail.
    struct BrokenStore;

    impl SentenceStore for BrokenStore {
        fn load_pairs(&self) -> std::result::Result<Vec<SentencePair>, StoreError> {
            Err(StoreError::Unavailable("database is locked".into()))
        }

        fn count(&self) -> std::result::Result<usize, StoreError> {
            Err(StoreError::Unavailable("database is locked".into()))
        }

        fn insert_batch(
            &self,
            _pairs: Vec<NewSentencePair>,
        ) -> std::result::Result<Vec<i64>, StoreError> {
            Err(StoreError::Storage("read-only".into()))
        }

        fn delete_ids(&self, _ids: &[i64]) -> std::result::Result<usize, StoreError> {
            panic!("delete must not run when the source is unavailable");
        }

        fn vacuum(&self) -> std::result::Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn unreadable_source_aborts_with_no_mutation() {
        let err = prune_duplicates(&BrokenStore, &PruneConfig::default(), |_| true).unwrap_err();
        assert!(matches!(err, PruneError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn invalid_config_fails_before_the_store_is_read() {
        // BrokenStore panics on delete and errors on load; a config error
        // must win before either happens.
        let config = PruneConfig {
            window_size: 0,
            ..Default::default()
        };
        let err = prune_duplicates(&BrokenStore, &config, |_| true).unwrap_err();
        assert!(matches!(err, PruneError::Config(_)));
    }
}
