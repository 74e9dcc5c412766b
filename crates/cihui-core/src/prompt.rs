use cihui_types::{QueryPattern, WILDCARD};

/// Rendered for every empty slot
pub const ANY_CHARACTER: &str = "任意字";

/// Describe one slot, `position` is 1-based
fn describe_slot(position: usize, slot: &str) -> String {
    if slot.is_empty() {
        format!("第{position}個位置是{ANY_CHARACTER}")
    } else {
        format!("第{position}個位置是「{slot}」（國字或注音）")
    }
}

/// Build the model instruction for a pattern.
///
/// Returns `None` for a blank pattern: an unconstrained query is never sent.
pub fn build_prompt(pattern: &QueryPattern) -> Option<String> {
    if pattern.is_blank() {
        return None;
    }

    let positions = pattern
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| describe_slot(i + 1, slot))
        .collect::<Vec<_>>()
        .join("，");

    Some(format!(
        "身為一個嚴格的 JSON API，請找出數個長度為 1 到 4 個字、符合以下條件的繁體中文詞彙：{positions}。\
         查詢模式：[{compact}]，'{WILDCARD}' 代表任何字或發音。\
         每個詞彙都要提供完整的注音符號、簡潔的中文解釋與一個例句，\
         並依照指定的 JSON 結構回傳。只回傳 JSON 陣列，不要有任何額外的文字或解釋。",
        compact = pattern.compact(),
    ))
}
