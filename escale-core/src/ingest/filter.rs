//! Pattern quality filtering.

use std::collections::BTreeSet;

use crate::types::{Item, Pattern};

/// Keep only patterns that describe an actual route.
///
/// A pattern is dropped when its flattened port-call list repeats a port
/// in two consecutive positions, or when it names fewer than two distinct
/// ports. Both shapes describe a vessel idling at one port rather than a
/// rotation worth reporting.
pub fn filter_informative(patterns: Vec<Pattern>) -> Vec<Pattern> {
    patterns.into_iter().filter(is_informative).collect()
}

fn is_informative(pattern: &Pattern) -> bool {
    let calls: Vec<Item> = pattern
        .sequence
        .itemsets()
        .iter()
        .flat_map(|itemset| itemset.iter())
        .collect();

    let repeats = calls.windows(2).any(|pair| pair[0] == pair[1]);
    let distinct: BTreeSet<Item> = calls.iter().copied().collect();
    !repeats && distinct.len() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Itemset, Sequence};

    fn pattern(calls: &[u32], support: usize) -> Pattern {
        Pattern::new(
            Sequence::new(
                calls
                    .iter()
                    .map(|&id| Itemset::singleton(Item::new(id)))
                    .collect(),
            ),
            support,
        )
    }

    #[test]
    fn test_route_patterns_survive() {
        let kept = filter_informative(vec![pattern(&[2, 3, 4], 3)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_consecutive_repetition_dropped() {
        let kept = filter_informative(vec![pattern(&[2, 2, 3], 3)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_single_port_patterns_dropped() {
        // One distinct port, with or without a gap between the calls.
        let kept = filter_informative(vec![pattern(&[2], 5), pattern(&[2, 3, 2], 2)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sequence.len(), 3);
    }

    #[test]
    fn test_non_consecutive_return_call_is_a_route() {
        // A, B, back to A: a loop rotation, not idling.
        let kept = filter_informative(vec![pattern(&[2, 3, 2], 4)]);
        assert_eq!(kept.len(), 1);
    }
}
