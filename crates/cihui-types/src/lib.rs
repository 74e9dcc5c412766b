mod types;

pub use types::{MAX_SLOTS, PatternError, QueryPattern, VocabularyEntry, WILDCARD};
