//! Error types for lazy_split.

use thiserror::Error;

/// The one way building a [`Splitter`](crate::split_strings::Splitter) can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// A required argument was absent. Carries the argument's name.
    #[error("invalid argument: `{0}` must be present")]
    InvalidArgument(&'static str),
}

/// Result type for lazy_split operations.
pub type Result<T> = std::result::Result<T, SplitError>;
