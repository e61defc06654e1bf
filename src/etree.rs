//! Element tree utilities with text/tail model support.
//!
//! The statistics pass reasons about elements the lxml way: an element
//! has its own inline **text** (text before its first child element) and
//! a **tail** (text between its closing tag and the next sibling
//! element). `dom_query` exposes a flat node tree where text lives in
//! dedicated text nodes, so this module reconstructs both views:
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- div's "text" -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- span's "tail" -->
//! </div>
//! ```

use dom_query::NodeRef;

/// Own inline text of an element: the concatenated contents of its text
/// node children up to the first child element.
#[must_use]
pub fn text(node: &NodeRef) -> String {
    let mut out = String::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_element() {
            break;
        }
        if c.is_text() {
            out.push_str(&c.text());
        }
        child = c.next_sibling();
    }
    out
}

/// Tail text of a node: the concatenated contents of the text nodes
/// following it, up to the next element sibling (or the parent's end).
#[must_use]
pub fn tail(node: &NodeRef) -> String {
    let mut out = String::new();
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            break;
        }
        if s.is_text() {
            out.push_str(&s.text());
        }
        sibling = s.next_sibling();
    }
    out
}

/// Direct element children of a node, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(dom_query::NodeRef::is_element)
        .collect()
}

/// Remove a node and its entire subtree, discarding its tail text along
/// with it (the tail is not reattached to a preceding sibling).
pub fn remove(node: &NodeRef) {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            break;
        }
        sibling = s.next_sibling();
        if s.is_text() {
            s.remove_from_parent();
        }
    }
    node.remove_from_parent();
}

/// Lowercase tag name of an element node, empty for non-elements.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}
