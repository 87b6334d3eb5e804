//! Selection-row enumeration: every way of marking `k` of `n` elements.
//!
//! The enumeration is recursive and position-first: fix the leftmost
//! selected position, then enumerate the remaining selections over the
//! suffix to its right. The resulting order is a fixed implementation
//! constant — the shuffle's reproducibility and exported reports both
//! depend on it, so it is asserted byte-for-byte in tests and must never
//! drift.
//!
//! Output size is C(n, k) and the work is O(C(n, k) × n). Element counts
//! in this domain are human-administered (single or low double digits),
//! so no large-n optimization is attempted.

use crate::types::SelectionRow;

/// Binomial coefficient C(n, k). Exact for the small arguments this
/// domain uses.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1usize;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// Enumerate all C(size, select_count) binary rows of length `size` with
/// exactly `select_count` ones, in canonical order.
///
/// Contract: `size >= 2` and `1 <= select_count <= size - 1`. The all-ones
/// and all-zeros rows are degenerate for this instrument and are excluded
/// by these bounds rather than filtered after the fact.
pub fn enumerate_rows(size: usize, select_count: usize) -> Vec<SelectionRow> {
    assert!(size >= 2, "size must be at least 2, got {}", size);
    assert!(
        (1..size).contains(&select_count),
        "select_count must be in 1..={}, got {}",
        size - 1,
        select_count
    );
    enumerate_partial(size, select_count - 1)
}

/// Enumerate rows of length `size` with one selection at each candidate
/// leftmost position plus `remaining` further selections in the suffix.
///
/// The loop bound `size - remaining` guarantees the suffix always has room
/// for the selections still owed, so every recursion that bottoms out is a
/// valid placement.
fn enumerate_partial(size: usize, remaining: usize) -> Vec<SelectionRow> {
    let mut rows = Vec::new();

    for r in 0..size - remaining {
        let mut row = vec![0u8; size];
        row[r] = 1;

        if remaining > 0 {
            let suffix_rows = enumerate_partial(size - r - 1, remaining - 1);
            for suffix in suffix_rows {
                let mut full = row[..=r].to_vec();
                full.extend_from_slice(&suffix);
                rows.push(full);
            }
        } else {
            rows.push(row);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(10, 1), 10);
        assert_eq!(binomial(10, 9), 10);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_canonical_order_4_choose_2() {
        // This exact order is load-bearing: seeded shuffles and exported
        // reports are only reproducible against a stable pre-shuffle order.
        let rows = enumerate_rows(4, 2);
        assert_eq!(
            rows,
            vec![
                vec![1, 1, 0, 0],
                vec![1, 0, 1, 0],
                vec![1, 0, 0, 1],
                vec![0, 1, 1, 0],
                vec![0, 1, 0, 1],
                vec![0, 0, 1, 1],
            ]
        );
    }

    #[test]
    fn test_single_selection_rows() {
        let rows = enumerate_rows(3, 1);
        assert_eq!(rows, vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_near_full_selection_rows() {
        let rows = enumerate_rows(3, 2);
        assert_eq!(rows, vec![vec![1, 1, 0], vec![1, 0, 1], vec![0, 1, 1]]);
    }

    #[test]
    fn test_row_counts_match_binomial() {
        for n in 2..=9 {
            for k in 1..n {
                let rows = enumerate_rows(n, k);
                assert_eq!(
                    rows.len(),
                    binomial(n, k),
                    "wrong row count for n={} k={}",
                    n,
                    k
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "select_count")]
    fn test_select_count_equal_to_size_rejected() {
        enumerate_rows(4, 4);
    }

    #[test]
    #[should_panic(expected = "select_count")]
    fn test_zero_select_count_rejected() {
        enumerate_rows(4, 0);
    }
}
