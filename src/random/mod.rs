//! Randomized permutations.
//!
//! [`shuffle`] draws from the thread-local generator; [`shuffle_with`] takes
//! any [`rand::Rng`], which makes results reproducible with a seeded
//! generator such as `rand::rngs::StdRng`.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use underbar::random::shuffle_with;
//!
//! let deck = [1, 2, 3, 4, 5];
//! let first = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
//! let second = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
//! assert_eq!(first, second);
//! ```

mod shuffle;

pub use shuffle::{shuffle, shuffle_with};
