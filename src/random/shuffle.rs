//! Fisher-Yates shuffle over a copy of the input.

use rand::Rng;

/// Returns a uniformly random permutation of `sequence`.
///
/// The input is left untouched. Sequences of length 0 or 1 come back as an
/// unchanged copy, and longer ones may by chance come back in their original
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::random::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a uniformly random permutation of `sequence`, drawing from `rng`.
///
/// For every index `i` from the last down to `1`, a uniformly random
/// `j` in `0..=i` is drawn and the elements at `i` and `j` are swapped. Each
/// of the `n!` orderings is equally likely and the pass is O(n).
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.random_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn test_shuffle_empty() {
        assert_eq!(shuffle::<i32>(&[]), Vec::<i32>::new());
    }

    #[rstest]
    fn test_shuffle_single_element() {
        assert_eq!(shuffle(&[1]), vec![1]);
    }

    #[rstest]
    fn test_shuffle_does_not_mutate_input() {
        let original = vec!['a', 'b', 'c', 'd'];
        let snapshot = original.clone();
        let _ = shuffle_with(&original, &mut StdRng::seed_from_u64(1));
        assert_eq!(original, snapshot);
    }

    #[rstest]
    fn test_shuffle_can_return_original_order() {
        // Two elements have only two orderings; some seed must keep the order.
        let kept = (0..64).any(|seed| {
            shuffle_with(&[1, 2], &mut StdRng::seed_from_u64(seed)) == vec![1, 2]
        });
        assert!(kept);
    }
}
