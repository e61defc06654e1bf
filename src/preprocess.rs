//! Document preprocessing: removal of non-content subtrees.
//!
//! Before any statistics are gathered, subtrees that can never be
//! article content are stripped from the body in place. Their tail text
//! goes with them.

use dom_query::NodeRef;

use crate::etree;

/// Tags whose subtrees are never article content.
const FORBIDDEN_TAGS: &[&str] = &["form", "iframe", "script", "style"];

/// Strip every forbidden subtree (and every comment node) below `body`,
/// in place. The removed node's tail text is discarded along with it.
/// A body without forbidden nodes is a no-op.
pub fn strip_forbidden(body: &NodeRef) {
    // Collect first: removal invalidates sibling iteration.
    let mut doomed = Vec::new();
    collect_forbidden(body, &mut doomed);

    for node in doomed.into_iter().rev() {
        etree::remove(&node);
    }
}

fn collect_forbidden<'a>(node: &NodeRef<'a>, doomed: &mut Vec<NodeRef<'a>>) {
    for child in node.children() {
        if child.is_comment() {
            doomed.push(child);
            continue;
        }
        if !child.is_element() {
            continue;
        }
        if FORBIDDEN_TAGS.contains(&etree::tag_name(&child).as_str()) {
            doomed.push(child);
        } else {
            collect_forbidden(&child, doomed);
        }
    }
}
