use thiserror::Error;

use crate::llm_client::LlmError;

/// Why a generation attempt produced no usable record.
///
/// Returned by the `try_*` operations. The total operations log it and
/// substitute the operation's fallback value instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Oracle call failed, or its text was not the expected JSON shape.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The request or the parsed response broke an operation contract.
    #[error("Invalid: {0}")]
    Invalid(String),
}

impl GenerationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GenerationError::Invalid(message.into())
    }
}

/// Converts a fallible generation into a total one: on error, logs and
/// returns `fallback()`.
pub fn or_fallback<T>(
    operation: &str,
    result: Result<T, GenerationError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(operation, error = %e, "Generation failed, using fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback_passes_success_through() {
        let value = or_fallback("op", Ok::<_, GenerationError>(3), || 0);
        assert_eq!(value, 3);
    }

    #[test]
    fn test_or_fallback_substitutes_on_error() {
        let value = or_fallback("op", Err(GenerationError::invalid("bad")), || 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_llm_error_converts() {
        let err: GenerationError = LlmError::EmptyContent.into();
        assert!(err.to_string().contains("empty content"));
    }
}
