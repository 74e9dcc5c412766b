use cihui_core::{ResponseError, parse_entries};
use cihui_types::VocabularyEntry;

use crate::{GenerateError, GenerationRequest, VocabularyGenerator};

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total model calls allowed, at least one
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    /// Every attempt returned empty or non-array output
    #[error("no valid result after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// The final attempt failed outright
    #[error("generation failed: {details}")]
    Fatal { details: String },
}

enum AttemptError {
    Provider(GenerateError),
    Response(ResponseError),
}

impl AttemptError {
    fn into_failure(self, attempts: u32) -> GenerationFailure {
        match self {
            AttemptError::Provider(e) => GenerationFailure::Fatal {
                details: e.to_string(),
            },
            AttemptError::Response(e) if e.is_decode_error() => GenerationFailure::Fatal {
                details: e.to_string(),
            },
            AttemptError::Response(_) => GenerationFailure::Exhausted { attempts },
        }
    }
}

async fn attempt(
    generator: &dyn VocabularyGenerator,
    request: &GenerationRequest,
) -> Result<Vec<VocabularyEntry>, AttemptError> {
    let text = generator
        .generate(request)
        .await
        .map_err(AttemptError::Provider)?;

    parse_entries(&text).map_err(AttemptError::Response)
}

/// Call the model until it yields a valid result set.
///
/// Attempts run back to back with no delay. Once the policy is exhausted the
/// outcome of the last attempt decides the failure kind.
pub async fn generate_vocabulary(
    generator: &dyn VocabularyGenerator,
    request: &GenerationRequest,
    policy: RetryPolicy,
) -> Result<Vec<VocabularyEntry>, GenerationFailure> {
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = None;

    for attempt_no in 1..=max_attempts {
        match attempt(generator, request).await {
            Ok(entries) => {
                if attempt_no > 1 {
                    tracing::info!(attempt = attempt_no, "generation succeeded after retry");
                }
                tracing::debug!(entries = entries.len(), "generation completed");
                return Ok(entries);
            }
            Err(AttemptError::Provider(e)) => {
                if attempt_no < max_attempts {
                    tracing::warn!(
                        attempt = attempt_no,
                        max_attempts,
                        error = %e,
                        "model call failed, retrying"
                    );
                } else {
                    tracing::error!(attempt = attempt_no, error = %e, "model call failed");
                }
                last_error = Some(AttemptError::Provider(e));
            }
            Err(AttemptError::Response(e)) => {
                tracing::warn!(
                    attempt = attempt_no,
                    max_attempts,
                    error = %e,
                    "received invalid data, retrying"
                );
                last_error = Some(AttemptError::Response(e));
            }
        }
    }

    tracing::error!(attempts = max_attempts, "all retry attempts exhausted");

    Err(match last_error {
        Some(e) => e.into_failure(max_attempts),
        None => GenerationFailure::Exhausted {
            attempts: max_attempts,
        },
    })
}
