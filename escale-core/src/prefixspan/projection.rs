//! Prefix projection: cutting every sequence just after its first match.

use crate::types::{Item, Sequence};

/// Project `view` on the last item of the current prefix.
///
/// Each sequence is scanned for its first itemset containing `last`. The
/// projected sequence opens with the residual of that itemset (minus the
/// item) when the residual is non-empty, followed by all later itemsets
/// unchanged. Sequences with no match, or whose projected remainder is
/// empty, are dropped entirely — an empty itemset or sequence never enters
/// a view.
///
/// Only the last prefix item matters here: earlier prefix positions are
/// already consumed by the view this is called on.
pub(crate) fn project(view: &[Sequence], last: Item) -> Vec<Sequence> {
    view.iter()
        .filter_map(|sequence| project_sequence(sequence, last))
        .collect()
}

fn project_sequence(sequence: &Sequence, last: Item) -> Option<Sequence> {
    let itemsets = sequence.itemsets();
    let matched = itemsets.iter().position(|itemset| itemset.contains(last))?;

    let mut suffix = Vec::with_capacity(itemsets.len() - matched);
    let residual = itemsets[matched].without(last);
    if !residual.is_empty() {
        suffix.push(residual);
    }
    suffix.extend_from_slice(&itemsets[matched + 1..]);

    if suffix.is_empty() {
        None
    } else {
        Some(Sequence::new(suffix))
    }
}
