use tournee_core::location::LocationIdx;
use tournee_core::tour::Tour;

/// Every ordering of `items`, in recursive generation order: for each
/// element in position order, that element is prepended to every ordering
/// of the remaining ones. A single element has exactly one ordering,
/// itself; an empty input yields none.
///
/// The order is deterministic, which is what makes "first enumerated wins"
/// tie-breaking reproducible across runs and across the partitioned
/// reduction.
pub fn permutations(items: &[LocationIdx]) -> Vec<Tour> {
    if items.is_empty() {
        return Vec::new();
    }
    if let [only] = items {
        return vec![vec![*only]];
    }

    let mut all = Vec::with_capacity(permutation_count(items.len()));
    for position in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(position);

        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            all.push(tail);
        }
    }
    all
}

/// len!, saturating to `usize::MAX` once the factorial no longer fits.
/// Advisory only: used as an allocation hint, never for correctness.
pub fn permutation_count(len: usize) -> usize {
    (1..=len)
        .try_fold(1usize, |acc, n| acc.checked_mul(n))
        .unwrap_or(usize::MAX)
}
