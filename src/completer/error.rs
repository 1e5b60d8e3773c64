use std::fmt;

/// Error returned when a commit is attempted but the displayed list has no
/// entry to commit.
///
/// Callers are expected to treat this as a no-op rather than surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoCandidateError;

impl std::error::Error for NoCandidateError {}

impl fmt::Display for NoCandidateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no candidate to commit")
    }
}
