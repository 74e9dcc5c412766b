use crate::ApiError;
use crate::routes::parse_inputs;

fn bad_request(body: &str) -> String {
    match parse_inputs(body.as_bytes()) {
        Err(ApiError::BadRequest(message)) => message,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(pattern) => panic!("accepted {pattern:?}"),
    }
}

#[test]
fn slots_keep_their_positions() {
    let pattern = parse_inputs(r#"{"inputs": [" 學", "", "ㄒ", " "]}"#.as_bytes()).unwrap();
    assert_eq!(pattern.slots(), &["學", "", "ㄒ", ""]);
}

#[test]
fn missing_or_empty_inputs() {
    assert_eq!(bad_request(""), "Invalid input: inputs array is required.");
    assert_eq!(bad_request("{}"), "Invalid input: inputs array is required.");
    assert_eq!(bad_request(r#"{"inputs": []}"#), "Invalid input: inputs array is required.");
    assert_eq!(bad_request(r#"{"inputs": "學"}"#), "Invalid input: inputs array is required.");
}

#[test]
fn malformed_body() {
    assert!(bad_request("{inputs").starts_with("Invalid request body"));
}

#[test]
fn non_string_slot() {
    assert!(bad_request(r#"{"inputs": ["學", 1]}"#).contains("strings"));
}

#[test]
fn too_many_slots() {
    assert!(bad_request(r#"{"inputs": ["a", "b", "c", "d", "e"]}"#).contains("at most 4"));
}
