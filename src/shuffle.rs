//! Fisher–Yates shuffle over enumerated rows.

use crate::rng::RandomSource;

/// Shuffle `items` in place with exactly `len - 1` swaps.
///
/// For each `i` from the last index down to 1, draws
/// `j = floor(next_f64() * (i + 1))` and swaps positions `i` and `j`.
/// Zero- and one-item slices perform no swaps. Draws are in `[0, 1)`, so
/// `j <= i` always holds.
pub fn fisher_yates<T>(items: &mut [T], source: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = (source.next_f64() * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SplitMix64;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        let mut source = SplitMix64::new(7);
        fisher_yates(&mut items, &mut source);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        fisher_yates(&mut a, &mut SplitMix64::new(42));
        fisher_yates(&mut b, &mut SplitMix64::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_handles_tiny_inputs() {
        let mut empty: Vec<u32> = Vec::new();
        fisher_yates(&mut empty, &mut SplitMix64::new(1));
        assert!(empty.is_empty());

        let mut single = vec![9u32];
        fisher_yates(&mut single, &mut SplitMix64::new(1));
        assert_eq!(single, vec![9]);
    }
}
