//! Configuration options for content extraction.
//!
//! The `Options` struct carries the algorithm's tunable constants. It is
//! threaded through the pipeline by reference so the core stays free of
//! process-wide state and each call can use its own configuration.

/// Tunable constants for the CoreEx scoring algorithm.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the reference values from the CoreEx paper.
///
/// # Example
///
/// ```rust
/// use coreex::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     threshold: 0.8,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum own-content ratio for a child to be admitted into its
    /// parent's core subset. The comparison is strict: a child whose
    /// ratio equals the threshold exactly is excluded.
    ///
    /// Default: `0.9`
    pub threshold: f64,

    /// Weight of the text-to-link ratio term in the scoring formula.
    ///
    /// Callers should keep `weight_ratio + weight_text = 1`, though this
    /// is not enforced.
    ///
    /// Default: `0.95`
    pub weight_ratio: f64,

    /// Weight of the text-mass term (subset text over whole-page text)
    /// in the scoring formula.
    ///
    /// Default: `0.05`
    pub weight_text: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: 0.9,
            weight_ratio: 0.95,
            weight_text: 0.05,
        }
    }
}
