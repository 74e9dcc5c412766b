/// Reasons a model response cannot be used as a result set
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("model returned empty text")]
    Empty,

    #[error("model returned invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model returned JSON that is not an array")]
    NotAnArray,
}

impl ResponseError {
    /// Decode failures are reported with details once retries run out,
    /// the other kinds only as a generic exhaustion.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, ResponseError::Malformed(_))
    }
}
