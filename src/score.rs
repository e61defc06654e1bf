//! Relevance scoring over the statistics side table.
//!
//! Scores every node that carries subset statistics, using the body's
//! total word count as a fixed page-wide denominator. Per-node scores
//! are independent of one another, so the table is scored in place with
//! no tree traversal.

use dom_query::NodeRef;

use crate::options::Options;
use crate::stats::StatsMap;

/// Assign a score to every analyzed non-anchor node with a non-zero
/// `set_text_cnt`:
///
/// ```text
/// score = weight_ratio * (set_text_cnt - set_link_cnt) / set_text_cnt
///       + weight_text  * set_text_cnt / page_text
/// ```
///
/// `page_text` is the body's `text_cnt`. A page with no words at all
/// gets no scores; nodes with empty set counts get none either.
pub fn assign(body: &NodeRef, stats: &mut StatsMap, options: &Options) {
    let page_text = stats.get(&body.id).map_or(0, |s| s.text_cnt);
    if page_text == 0 {
        return;
    }

    for record in stats.values_mut() {
        let Some(subset) = &record.subset else {
            continue;
        };
        if subset.set_text_cnt == 0 {
            continue;
        }

        let set_text = subset.set_text_cnt as f64;
        let set_link = subset.set_link_cnt as f64;
        record.score = Some(
            options.weight_ratio * (set_text - set_link) / set_text
                + options.weight_text * set_text / page_text as f64,
        );
    }
}
