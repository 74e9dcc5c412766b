use serde::{Deserialize, Serialize};

/// Number of positional slots a query can carry
pub const MAX_SLOTS: usize = 4;

/// Placeholder used for empty slots in the compact pattern form
pub const WILDCARD: &str = "?";

/// One word returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    /// Full zhuyin reading, e.g. "ㄒㄩㄝˊ ㄒㄧˊ"
    pub pronunciation: String,
    pub definition: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("at least one slot is required")]
    NoSlots,

    #[error("at most {MAX_SLOTS} slots are allowed, got {0}")]
    TooManySlots(usize),
}

/// Ordered slots of a fill-in-the-blank lookup.
///
/// A slot is either a character/zhuyin fragment or empty, where empty (after
/// trimming) means "any character".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPattern {
    slots: Vec<String>,
}

impl QueryPattern {
    pub fn new<I, S>(slots: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<String> = slots
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .collect();

        match slots.len() {
            0 => Err(PatternError::NoSlots),
            n if n > MAX_SLOTS => Err(PatternError::TooManySlots(n)),
            _ => Ok(Self { slots }),
        }
    }

    /// Trimmed slots, empty string for wildcards
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(|s| s.is_empty())
    }

    /// `學 ? ㄒ ?` style rendering
    pub fn compact(&self) -> String {
        self.slots
            .iter()
            .map(|s| if s.is_empty() { WILDCARD } else { s.as_str() })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
