//! Error types for coreex.
//!
//! The algorithm itself has no failure modes: division-by-zero situations
//! during ratio and score computation are policy outcomes ("not core",
//! "no score"), absorbed internally. The only error a caller can see is a
//! violated precondition on the input document.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no body element to analyze.
    #[error("document has no body element")]
    MissingBody,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
