use cihui_types::{QueryPattern, VocabularyEntry, WILDCARD};

use crate::client::BackendClient;
use crate::render;

/// What the terminal shows for one lookup
#[derive(Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Every slot was empty, nothing was sent
    Blank,
    /// Any backend or transport error; the cause is not shown
    Failed,
    Results(Vec<VocabularyEntry>),
}

/// `?` stands for an empty slot on the command line
pub fn normalize_slots(slots: Vec<String>) -> Vec<String> {
    slots
        .into_iter()
        .map(|s| if s.trim() == WILDCARD { String::new() } else { s })
        .collect()
}

pub async fn run_query(slots: &[String], client: &BackendClient) -> QueryOutcome {
    match QueryPattern::new(slots.iter().map(String::as_str)) {
        Ok(pattern) if pattern.is_blank() => return QueryOutcome::Blank,
        Ok(_) => {}
        Err(e) => {
            tracing::debug!("rejected slots: {e}");
            return QueryOutcome::Failed;
        }
    }

    eprintln!("{}", render::LOADING);

    match client.fetch_vocabulary(slots).await {
        Ok(entries) => QueryOutcome::Results(entries),
        Err(e) => {
            tracing::debug!("Error fetching vocabulary from backend: {e:#}");
            QueryOutcome::Failed
        }
    }
}
