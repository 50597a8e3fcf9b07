use serde::{Deserialize, Serialize};

/// A persisted Turkish-English sentence pair.
///
/// `english_text` is the side the duplicate pruning pass compares;
/// everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub id: i64,
    pub turkish_text: String,
    pub english_text: String,
    pub is_favorite: bool,
    pub difficulty_level: Option<String>,
}

/// Insert shape for a sentence pair; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSentencePair {
    pub turkish_text: String,
    pub english_text: String,
    pub difficulty_level: Option<String>,
}

impl NewSentencePair {
    pub fn new(turkish: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            turkish_text: turkish.into(),
            english_text: english.into(),
            difficulty_level: None,
        }
    }

    pub fn with_difficulty(mut self, level: impl Into<String>) -> Self {
        self.difficulty_level = Some(level.into());
        self
    }
}
