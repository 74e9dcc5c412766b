use serde_json::{Value, json};

/// Structured-output schema the model is constrained to: an array of
/// four-field string objects.
pub fn vocabulary_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": {
                    "type": "STRING",
                    "description": "詞彙本身 (例如: 學習)"
                },
                "pronunciation": {
                    "type": "STRING",
                    "description": "詞彙的完整注音符號 (例如: ㄒㄩㄝˊ ㄒㄧˊ)"
                },
                "definition": {
                    "type": "STRING",
                    "description": "詞彙的簡潔中文解釋"
                },
                "example": {
                    "type": "STRING",
                    "description": "使用該詞彙的中文例句"
                }
            },
            "required": ["word", "pronunciation", "definition", "example"]
        }
    })
}
