#![cfg(feature = "decorator")]
//! Property-based tests for memoize.
//!
//! This module verifies that:
//!
//! - **Transparency**: a memoized function returns what the function returns
//! - **Single evaluation**: each distinct argument list is computed once
//! - **Order sensitivity**: permuted argument lists are distinct cache keys

use proptest::prelude::*;
use std::cell::Cell;
use underbar::decorator::memoize;

proptest! {
    /// Memoized results equal direct results, and repeats never recompute
    #[test]
    fn prop_memoize_is_transparent(calls in prop::collection::vec((0_i32..8, 0_i32..8), 0..64)) {
        let evaluations = Cell::new(0_usize);
        let combine = |(left, right): (i32, i32)| left * 31 + right;
        let memoized = memoize(|arguments: (i32, i32)| {
            evaluations.set(evaluations.get() + 1);
            combine(arguments)
        });

        let mut distinct = Vec::new();
        for arguments in calls {
            prop_assert_eq!(memoized.call(arguments), Ok(combine(arguments)));
            if !distinct.contains(&arguments) {
                distinct.push(arguments);
            }
        }

        prop_assert_eq!(evaluations.get(), distinct.len());
        prop_assert_eq!(memoized.len(), distinct.len());
    }
}

proptest! {
    /// [a, b] and [b, a] share an entry only when a == b
    #[test]
    fn prop_memoize_is_order_sensitive(left in any::<u16>(), right in any::<u16>()) {
        let evaluations = Cell::new(0_usize);
        let memoized = memoize(|arguments: Vec<u16>| {
            evaluations.set(evaluations.get() + 1);
            arguments.len()
        });

        memoized.call(vec![left, right]).unwrap();
        memoized.call(vec![right, left]).unwrap();

        let expected = if left == right { 1 } else { 2 };
        prop_assert_eq!(evaluations.get(), expected);
    }
}
