//! Level-wise candidate generation.

use crate::types::Sequence;

/// Join every ordered pair of distinct length-k patterns into length-(k+1)
/// candidates.
///
/// The join drops the first item of `a`'s first itemset and the last item
/// of `b`'s last itemset, a dropped position vanishing outright when the
/// removal empties it, and compares the remaining middles. Every pattern
/// reaching this generator is built from singleton itemsets — seeds are
/// singletons and the join only ever appends trailing itemsets — so the
/// middle comparison reduces to `a[1..] == b[..k-1]`. On a match, `b`'s
/// original last itemset is appended onto `a`. Candidates retaining an
/// empty itemset are discarded.
///
/// The join never widens an existing itemset with an extra item; patterns
/// with multi-item itemsets are outside this miner's reach.
pub(crate) fn generate_candidates(frequent: &[Sequence]) -> Vec<Sequence> {
    let mut candidates = Vec::new();

    for (left_idx, left) in frequent.iter().enumerate() {
        for (right_idx, right) in frequent.iter().enumerate() {
            if left_idx == right_idx {
                continue;
            }
            let Some(tail) = right.last() else { continue };
            if left.is_empty() {
                continue;
            }

            let left_middle = &left.itemsets()[1..];
            let right_middle = &right.itemsets()[..right.len() - 1];
            if left_middle != right_middle {
                continue;
            }

            let candidate = left.with_itemset(tail.clone());
            if candidate.itemsets().iter().all(|itemset| !itemset.is_empty()) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}
