//! imlex-store: Persistence for Turkish-English sentence pairs.
//!
//! Owns the `sentences` table layout and exposes the `SentenceStore`
//! trait that library maintenance passes run against.

pub mod pair;
pub mod sqlite_store;
pub mod store;

pub use pair::{NewSentencePair, SentencePair};
pub use sqlite_store::{SqliteSentenceStore, DELETE_CHUNK_SIZE};
pub use store::{SentenceStore, StoreError};
