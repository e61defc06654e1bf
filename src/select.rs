//! Best-node selection and one-level pruning.
//!
//! The final stage of the pipeline: pick the highest-scoring candidate
//! and drop the direct children that were not admitted into its core
//! subset. Pruning never recurses; grandchildren are kept or discarded
//! en bloc with their parent.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::etree;
use crate::stats::StatsMap;

/// Candidate set for best-node selection: the body itself followed by
/// all its element descendants, in document order. Captured after
/// preprocessing, so stripped subtrees are not phantom candidates.
#[must_use]
pub fn candidates<'a>(body: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = vec![*body];
    collect(body, &mut out);
    out
}

fn collect<'a>(node: &NodeRef<'a>, out: &mut Vec<NodeRef<'a>>) {
    for child in etree::element_children(node) {
        out.push(child);
        collect(&child, out);
    }
}

/// Node with the maximum score among the candidates. A node without a
/// score compares as 0. Ties go to the first maximal node in document
/// order, which makes selection deterministic; in particular the body
/// (first candidate) wins a page where nothing scores above 0.
#[must_use]
pub fn best_node<'a>(candidates: &[NodeRef<'a>], stats: &StatsMap) -> Option<NodeRef<'a>> {
    let mut best: Option<(NodeRef<'a>, f64)> = None;
    for node in candidates {
        let score = stats.get(&node.id).and_then(|s| s.score).unwrap_or(0.0);
        match &best {
            Some((_, top)) if score <= *top => {}
            _ => best = Some((*node, score)),
        }
    }
    best.map(|(node, _)| node)
}

/// Remove from `best`'s direct children every child not present in its
/// core subset, together with each removed child's subtree and tail.
/// Direct children only; no re-evaluation deeper down.
pub fn prune(best: &NodeRef, stats: &StatsMap) {
    let empty = HashSet::new();
    let members: &HashSet<NodeId> = stats
        .get(&best.id)
        .and_then(|s| s.subset.as_ref())
        .map_or(&empty, |subset| &subset.members);

    for child in etree::element_children(best) {
        if !members.contains(&child.id) {
            etree::remove(&child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::{score, stats};
    use dom_query::Document;

    fn pipeline(doc: &Document) -> (Vec<NodeRef<'_>>, StatsMap) {
        let opts = Options::default();
        let body_sel = doc.select("body");
        let body = body_sel.nodes()[0];
        let mut table = stats::build(&body, &opts);
        score::assign(&body, &mut table, &opts);
        (candidates(&body), table)
    }

    #[test]
    fn test_candidates_in_document_order() {
        let doc = Document::from("<body><div><p>a</p><p>b</p></div><span>c</span></body>");
        let (cands, _) = pipeline(&doc);

        let tags: Vec<String> = cands.iter().map(etree::tag_name).collect();
        assert_eq!(tags, ["body", "div", "p", "p", "span"]);
    }

    #[test]
    fn test_best_node_prefers_scored_content() {
        let doc = Document::from(
            r#"<body><div><p>substantial article text with several words</p></div></body>"#,
        );
        let (cands, table) = pipeline(&doc);

        let best = best_node(&cands, &table).unwrap();
        // All-text page: body, div and p all score 1.0, so the first
        // maximal node in document order (the body) wins.
        assert_eq!(etree::tag_name(&best), "body");
    }

    #[test]
    fn test_scoreless_page_falls_back_to_first_candidate() {
        let doc = Document::from("<body><div></div></body>");
        let (cands, table) = pipeline(&doc);

        let best = best_node(&cands, &table).unwrap();
        assert_eq!(etree::tag_name(&best), "body");
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let table = StatsMap::new();
        assert!(best_node(&[], &table).is_none());
    }

    #[test]
    fn test_prune_removes_non_subset_children() {
        let doc = Document::from(
            r##"<body><div><p>real article content with many words here</p><nav><a href="#">Home</a><a href="#">About</a></nav></div></body>"##,
        );
        let opts = Options::default();
        let body_sel = doc.select("body");
        let body = body_sel.nodes()[0];
        let table = stats::build(&body, &opts);

        let div = doc.select("div").nodes()[0];
        prune(&div, &table);

        assert!(doc.select("nav").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_prune_keeps_subset_children_unmodified() {
        let doc = Document::from(
            r#"<body><div><p>first clean paragraph here</p><p>second clean paragraph too</p></div></body>"#,
        );
        let opts = Options::default();
        let body_sel = doc.select("body");
        let body = body_sel.nodes()[0];
        let table = stats::build(&body, &opts);

        let div = doc.select("div").nodes()[0];
        prune(&div, &table);

        assert_eq!(doc.select("p").length(), 2);
        assert!(doc.select("div").text().contains("first clean paragraph here"));
    }
}
