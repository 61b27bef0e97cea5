use thiserror::Error;

/// Raised when code asserts that a value is present and it is not.
///
/// This is the only failure a [`Maybe`](crate::Maybe) can report. The
/// variant records which operation observed the absence; callers that
/// only care about "was it absent" can match on the type alone.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AbsentValueError {
    #[error("Expected a present value, but an absent one was supplied")]
    RequiredWasAbsent,

    #[error("Cannot extract a value from an absent Maybe")]
    UnwrappedAbsent,
}

pub type Result<T> = std::result::Result<T, AbsentValueError>;
