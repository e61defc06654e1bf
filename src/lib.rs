//! # coreex
//!
//! Statistical article-content extraction for HTML documents, using the
//! CoreEx algorithm ("CoreEx: Content Extraction from Online News
//! Articles", Prasad & Paepcke).
//!
//! The library scores every element of the DOM tree by the ratio of
//! real text to link text it and its best sub-elements contain, picks
//! the highest-scoring element as the article body, and prunes its
//! noisy children. No site-specific rules, no machine learning; a pure
//! structural heuristic over one in-memory tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use coreex::extract;
//!
//! let html = r#"<html><body><div>
//! <p>The article body with enough words to matter.</p>
//! <nav><a href="/">Home</a><a href="/about">About</a></nav>
//! </div></body></html>"#;
//!
//! let result = extract(html)?;
//! assert!(result.content_text.contains("article body"));
//! # Ok::<(), coreex::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Four stages, strictly forward over one tree:
//!
//! 1. **Preprocess** - strip form/iframe/script/style subtrees and
//!    comments from the body.
//! 2. **Statistics** - post-order accumulation of text/link word counts
//!    and per-node core subsets.
//! 3. **Score** - per-node relevance from the subset counts, normalized
//!    by whole-page text.
//! 4. **Select/prune** - pick the best node, drop its non-core children.

mod error;
mod extract;
mod options;
mod result;

/// Element tree utilities with text/tail model support.
pub mod etree;

/// Diacritic-insensitive word counting.
pub mod words;

/// Removal of non-content subtrees before analysis.
pub mod preprocess;

/// Per-node text/link statistics and core-subset selection.
pub mod stats;

/// Relevance scoring over the statistics table.
pub mod score;

/// Best-node selection and pruning.
pub mod select;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractResult;

/// Extracts the main content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use coreex::extract;
///
/// let html = "<html><body><p>Article text here.</p></body></html>";
/// let result = extract(html)?;
/// assert!(result.content_text.contains("Article text"));
/// # Ok::<(), coreex::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use coreex::{extract_with_options, Options};
///
/// let html = "<html><body><p>Article text here.</p></body></html>";
/// let options = Options {
///     threshold: 0.8,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// # Ok::<(), coreex::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts the main content from HTML bytes with automatic encoding
/// detection.
///
/// Charset is sniffed from the BOM or meta declarations and the bytes
/// are decoded to UTF-8 (lossily) before extraction.
///
/// # Example
///
/// ```rust
/// use coreex::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Un caf\xE9 serre, s'il vous plait.</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("café"));
/// # Ok::<(), coreex::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}

/// Extracts the main content from HTML bytes with custom options and
/// automatic encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
