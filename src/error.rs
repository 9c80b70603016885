// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! Errors reported by [`RandomGrabSet`](../random_grab_set/struct.RandomGrabSet.html).

use thiserror::Error;

/// A violated precondition of a `RandomGrabSet` operation.
///
/// None of these leave the set partially modified: the failing call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrabSetError {
    /// `add` was called with an element that is already a member.
    #[error("element is already present in the set")]
    DuplicateElement,
    /// `remove` was called with an element that is not a member.
    #[error("element is not present in the set")]
    NotFound,
    /// A random element was requested from an empty set.
    #[error("cannot pick a random element from an empty set")]
    Empty,
}
