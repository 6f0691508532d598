//! Error types for the control structures.
//!
//! Only [`Optional::get`](super::Optional::get) can fail on its own. Every
//! other failing accessor hands back the caller's own error value unchanged.

/// Returned when the payload of an `Empty` [`Optional`](super::Optional) is
/// requested without a fallback.
///
/// Reaching this error usually means the caller skipped a presence check;
/// prefer [`get_or_else`](super::Optional::get_or_else) when absence is an
/// expected outcome.
///
/// # Examples
///
/// ```rust
/// use optunion::control::{EmptyValueError, Optional};
///
/// let nothing: Optional<i32> = Optional::empty();
/// assert_eq!(nothing.get(), Err(EmptyValueError));
/// assert_eq!(
///     EmptyValueError.to_string(),
///     "called `Optional::get()` on an `Empty` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueError;

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("called `Optional::get()` on an `Empty` value")
    }
}

impl std::error::Error for EmptyValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_error_display() {
        assert_eq!(
            format!("{EmptyValueError}"),
            "called `Optional::get()` on an `Empty` value"
        );
    }

    #[test]
    fn test_empty_value_error_is_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> = Box::new(EmptyValueError);
        assert!(error.source().is_none());
        assert!(error.downcast_ref::<EmptyValueError>().is_some());
    }
}
