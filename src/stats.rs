//! Per-node text/link statistics and core-subset selection.
//!
//! This is the bottom-up half of the CoreEx algorithm. Every element
//! below the body gets a [`NodeStats`] record in a side table keyed by
//! its `NodeId` (the DOM nodes themselves are never extended). A node's
//! record holds the word counts of its whole subtree and, for non-anchor
//! nodes, the "core subset": the direct children whose own text-to-link
//! ratio marks them as substantive content rather than boilerplate.
//!
//! Anchors are opaque leaves: one unit of text, one unit of link text,
//! no subset, children untraversed. This is a deliberate simplification
//! from the CoreEx paper, not a bug.

use std::collections::{HashMap, HashSet};

use dom_query::{NodeId, NodeRef};

use crate::etree;
use crate::options::Options;
use crate::words;

/// Aggregated counts restricted to a node's own text, its children's
/// tails, and the children admitted into the core subset.
#[derive(Debug, Clone, Default)]
pub struct SubsetStats {
    /// Direct children judged to be core content.
    pub members: HashSet<NodeId>,
    /// Word count over own text, children's tails, and subset members.
    pub set_text_cnt: usize,
    /// Link word count over subset members.
    pub set_link_cnt: usize,
}

/// Analysis record for a single analyzed node.
#[derive(Debug, Clone, Default)]
pub struct NodeStats {
    /// Words in this node's own text plus all descendants' text and tails.
    pub text_cnt: usize,
    /// Words attributable to anchor descendants.
    pub link_cnt: usize,
    /// Core-subset fields; absent for anchor nodes.
    pub subset: Option<SubsetStats>,
    /// Relevance score, set by the scorer when `set_text_cnt > 0`.
    pub score: Option<f64>,
}

/// Side table mapping node identity to its analysis record.
pub type StatsMap = HashMap<NodeId, NodeStats>;

/// Build statistics for `body` and every element below it, post-order
/// (children fully processed before their parent).
#[must_use]
pub fn build(body: &NodeRef, options: &Options) -> StatsMap {
    let mut stats = StatsMap::new();
    visit(body, options, &mut stats);
    stats
}

fn visit(node: &NodeRef, options: &Options, stats: &mut StatsMap) {
    if etree::tag_name(node) == "a" {
        stats.insert(
            node.id,
            NodeStats {
                text_cnt: 1,
                link_cnt: 1,
                subset: None,
                score: None,
            },
        );
        return;
    }

    let own_words = words::count_words(&etree::text(node));
    let mut text_cnt = own_words;
    let mut link_cnt = 0;
    let mut subset = SubsetStats {
        members: HashSet::new(),
        set_text_cnt: own_words,
        set_link_cnt: 0,
    };

    for child in etree::element_children(node) {
        visit(&child, options, stats);
        let (child_text, child_link) = stats
            .get(&child.id)
            .map_or((0, 0), |s| (s.text_cnt, s.link_cnt));

        text_cnt += child_text;
        link_cnt += child_link;

        let tail_words = words::count_words(&etree::tail(&child));
        text_cnt += tail_words;
        subset.set_text_cnt += tail_words;

        // A child with no words at all is never core.
        if child_text > 0 {
            let ratio = (child_text as f64 - child_link as f64) / child_text as f64;
            if ratio > options.threshold {
                subset.members.insert(child.id);
                subset.set_text_cnt += child_text;
                subset.set_link_cnt += child_link;
            }
        }
    }

    stats.insert(
        node.id,
        NodeStats {
            text_cnt,
            link_cnt,
            subset: Some(subset),
            score: None,
        },
    );
}
