//! Pipeline orchestration for the CoreEx algorithm.
//!
//! Four stages over one in-memory tree, strictly forward:
//! preprocess -> statistics -> scoring -> selection/pruning.
//! Single-threaded, no I/O; parsing happens on entry, serialization on
//! exit, both via `dom_query`.

use dom_query::{Document, Selection};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ExtractResult;
use crate::{preprocess, score, select, stats};

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let document = Document::from(html);

    let body_sel = document.select("body");
    let Some(body) = body_sel.nodes().first() else {
        return Err(Error::MissingBody);
    };

    preprocess::strip_forbidden(body);

    let mut table = stats::build(body, options);
    score::assign(body, &mut table, options);

    let candidates = select::candidates(body);
    let Some(best) = select::best_node(&candidates, &table) else {
        // Candidates always include the body itself.
        return Err(Error::MissingBody);
    };

    select::prune(&best, &table);

    let best_sel = Selection::from(best);
    Ok(ExtractResult {
        content_text: best_sel.text().trim().to_string(),
        content_html: best_sel.html().to_string(),
    })
}
