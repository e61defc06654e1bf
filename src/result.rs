//! Result types for extraction output.

/// Result of content extraction from an HTML document.
///
/// Holds the pruned best-node subtree in both serialized forms. The
/// HTML form preserves the subtree's structure; the text form is the
/// concatenated text content, trimmed.
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Main content as plain text.
    pub content_text: String,

    /// Main content as HTML (the pruned best node, outer markup).
    pub content_html: String,
}
