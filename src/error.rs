use thiserror::Error;

/// Failure of an optional browser capability (storage, share, clipboard).
///
/// These never reach the page: callers log them and carry on with whatever
/// degraded behaviour is left.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("rejected: {0}")]
    Rejected(String),
}
