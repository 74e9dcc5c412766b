use cihui_types::VocabularyEntry;

pub const BLANK_QUERY: &str = "請至少在一個格子中輸入國字或注音。";
pub const QUERY_FAILED: &str = "查詢時發生錯誤，請稍後再試或調整您的輸入。";
pub const NO_RESULTS: &str = "找不到相關詞彙";
pub const NO_RESULTS_HINT: &str = "請嘗試使用不同的國字或注音組合。";
pub const LOADING: &str = "查詢中…";

/// One card per entry, or the no-results message
pub fn render_results(entries: &[VocabularyEntry]) -> String {
    if entries.is_empty() {
        return format!("{NO_RESULTS}\n{NO_RESULTS_HINT}\n");
    }

    entries
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(entry: &VocabularyEntry) -> String {
    format!(
        "{}\n  {}\n  【解釋】{}\n  【例句】「{}」\n",
        entry.word, entry.pronunciation, entry.definition, entry.example
    )
}
