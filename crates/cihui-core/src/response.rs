use cihui_types::VocabularyEntry;
use serde_json::Value;

use crate::error::ResponseError;

/// Validate raw model text and decode it into entries.
///
/// Field values are kept verbatim.
pub fn parse_entries(text: &str) -> Result<Vec<VocabularyEntry>, ResponseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ResponseError::Empty);
    }

    let value: Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ResponseError::NotAnArray);
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert!(matches!(parse_entries(""), Err(ResponseError::Empty)));
        assert!(matches!(parse_entries(" \n\t "), Err(ResponseError::Empty)));
    }

    #[test]
    fn invalid_json() {
        let err = parse_entries("[{\"word\": ").unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn object_is_not_an_array() {
        let err = parse_entries(r#"{"word": "學習"}"#).unwrap_err();
        assert!(matches!(err, ResponseError::NotAnArray));
        assert!(!err.is_decode_error());
    }

    #[test]
    fn items_must_have_all_fields() {
        let err = parse_entries(r#"[{"word": "學習", "pronunciation": "ㄒㄩㄝˊ ㄒㄧˊ"}]"#).unwrap_err();
        assert!(matches!(err, ResponseError::Malformed(_)));
    }

    #[test]
    fn empty_array_is_valid() {
        assert_eq!(parse_entries("[]").unwrap(), Vec::new());
    }

    #[test]
    fn fields_survive_verbatim() {
        let text = r#"
            [
              {
                "word": " 學習 ",
                "pronunciation": "ㄒㄩㄝˊ ㄒㄧˊ",
                "definition": "獲得知識、技能。",
                "example": "「活到老，學到老。」"
              },
              {
                "word": "學生",
                "pronunciation": "ㄒㄩㄝˊ ㄕㄥ",
                "definition": "在學校讀書的人。",
                "example": "他是一位認真的學生。"
              }
            ]
        "#;

        let entries = parse_entries(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, " 學習 ");
        assert_eq!(entries[0].example, "「活到老，學到老。」");
        assert_eq!(entries[1].pronunciation, "ㄒㄩㄝˊ ㄕㄥ");

        let reencoded = serde_json::to_string(&entries).unwrap();
        assert_eq!(parse_entries(&reencoded).unwrap(), entries);
    }
}
