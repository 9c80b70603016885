// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `RandomSource`: where `RandomGrabSet` gets its random indexes from.
//!
//! The set never creates or reseeds a generator of its own. Whatever implements
//! `RandomSource` is handed to it at construction, which lets callers pick a
//! seeded generator for reproducible runs, share one generator between several
//! sets, or substitute a scripted source in tests.
//!
//! Every [`rand::Rng`] is a `RandomSource`, and so is a `&mut` borrow of one.

use rand::Rng;

/// A generator of uniformly distributed indexes.
///
/// Implementations must return a value in `0..bound`, each with probability
/// `1 / bound`, for any `bound > 0`. `RandomGrabSet` never calls this with a
/// zero bound.
///
/// # Examples
///
/// A scripted source that always returns the last slot:
///
/// ```
/// use grabset::random_source::RandomSource;
///
/// struct Last;
///
/// impl RandomSource for Last {
///     fn next_index(&mut self, bound: usize) -> usize {
///         bound - 1
///     }
/// }
///
/// assert_eq!(4, Last.next_index(5));
/// ```
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<G: Rng> RandomSource for G {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
