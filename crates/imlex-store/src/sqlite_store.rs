use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, params_from_iter, Connection};
use tracing::{debug, info};

use crate::pair::{NewSentencePair, SentencePair};
use crate::store::{SentenceStore, StoreError};

/// Ids per `DELETE ... WHERE id IN (...)` statement. SQLite caps bound
/// parameters per statement, so deletions run in chunks of this size.
pub const DELETE_CHUNK_SIZE: usize = 900;

/// SQLite-backed implementation of the SentenceStore trait.
pub struct SqliteSentenceStore {
    conn: Mutex<Connection>,
}

impl SqliteSentenceStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(format!("open {}: {}", path.display(), e)))?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(format!("open_in_memory: {}", e)))?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;

            CREATE TABLE IF NOT EXISTS sentences (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                turkish_text TEXT NOT NULL,
                english_text TEXT NOT NULL,
                is_favorite INTEGER NOT NULL DEFAULT 0,
                difficulty_level TEXT,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_sentences_english ON sentences(english_text);
            CREATE INDEX IF NOT EXISTS idx_sentences_turkish ON sentences(turkish_text);
            CREATE INDEX IF NOT EXISTS idx_sentences_favorite ON sentences(is_favorite);
            ",
        )
        .map_err(|e| StoreError::Storage(format!("init_schema: {}", e)))?;
        Ok(())
    }

    /// Insert a single pair on the given connection (or transaction).
    fn insert_pair(conn: &Connection, pair: &NewSentencePair) -> Result<i64, StoreError> {
        conn.execute(
            "INSERT INTO sentences (turkish_text, english_text, difficulty_level)
             VALUES (?1, ?2, ?3)",
            params![pair.turkish_text, pair.english_text, pair.difficulty_level],
        )
        .map_err(|e| StoreError::Storage(format!("insert: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }
}

impl SentenceStore for SqliteSentenceStore {
    fn load_pairs(&self) -> Result<Vec<SentencePair>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, turkish_text, english_text, is_favorite, difficulty_level
                 FROM sentences ORDER BY id",
            )
            .map_err(|e| StoreError::Unavailable(format!("prepare load: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SentencePair {
                    id: row.get(0)?,
                    turkish_text: row.get(1)?,
                    english_text: row.get(2)?,
                    is_favorite: row.get::<_, i64>(3)? != 0,
                    difficulty_level: row.get(4)?,
                })
            })
            .map_err(|e| StoreError::Unavailable(format!("load: {}", e)))?;

        let mut pairs = Vec::new();
        for row in rows {
            pairs.push(row.map_err(|e| StoreError::Unavailable(format!("row: {}", e)))?);
        }
        Ok(pairs)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sentences", [], |row| row.get(0))
            .map_err(|e| StoreError::Unavailable(format!("count: {}", e)))?;
        Ok(count as usize)
    }

    fn insert_batch(&self, pairs: Vec<NewSentencePair>) -> Result<Vec<i64>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StoreError::Storage(format!("begin tx: {}", e)))?;

        let mut ids = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            ids.push(Self::insert_pair(&tx, pair)?);
        }

        tx.commit()
            .map_err(|e| StoreError::Storage(format!("commit: {}", e)))?;
        Ok(ids)
    }

    fn delete_ids(&self, ids: &[i64]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        // Each chunk commits on its own; a failure leaves earlier chunks
        // applied and reports the ids still pending.
        let mut deleted = 0usize;
        for (index, chunk) in ids.chunks(DELETE_CHUNK_SIZE).enumerate() {
            let placeholders = vec!["?"; chunk.len()].join(",");
            let sql = format!("DELETE FROM sentences WHERE id IN ({})", placeholders);
            match conn.execute(&sql, params_from_iter(chunk.iter())) {
                Ok(rows) => {
                    deleted += rows;
                    debug!(chunk = index, rows, "deleted chunk");
                }
                Err(e) => {
                    return Err(StoreError::PartialDeletion {
                        deleted,
                        remaining: ids[index * DELETE_CHUNK_SIZE..].to_vec(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        info!(deleted, "deletion complete");
        Ok(deleted)
    }

    fn vacuum(&self) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        conn.execute_batch("VACUUM")
            .map_err(|e| StoreError::Storage(format!("vacuum: {}", e)))?;
        Ok(())
    }
}
