//! Errors raised by the sample binary.
//!
//! Rule violations are not errors: they are the `Left` side of
//! [`check`](crate::check)'s result. These variants cover reading subjects
//! from the command line and printing the outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EligibilityError {
    #[error("unknown gender: {0:?} (expected male or female)")]
    UnknownGender(String),

    #[error("invalid age {input:?}: {source}")]
    InvalidAge {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("expected <first-name> <last-name> <age> <gender> [middle-name], got {0} argument(s)")]
    WrongArgumentCount(usize),

    #[error("failed to render result: {0}")]
    Serialization(#[from] serde_json::Error),
}
