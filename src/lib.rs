// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # Grab Set for Rust
//! A hash set that can also return one of its members, chosen uniformly at random.
//!
//! `RandomGrabSet` supports `add`, `contains`, `remove` and `get_random`, all in amortized
//! O(1). It is meant as a building block for things like peer or candidate pickers, which
//! need "give me any one member, cheaply" on top of ordinary set operations.
//!
//! Randomness is injected: the set is constructed with a `RandomSource` and never creates
//! one of its own. Any `rand::Rng` qualifies, so a seeded `StdRng` gives reproducible runs.
//!
//! The set is not synchronized. Callers sharing it between threads must wrap every call,
//! `get_random` included, in their own lock.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! grabset = "0.1.0"
//! ```
//!
//! and then:
//!
//! ```rust
//! use grabset::random_grab_set::RandomGrabSet;
//!
//! let mut set = RandomGrabSet::new(rand::rng());
//! set.add(1).unwrap();
//! set.add(2).unwrap();
//! set.add(3).unwrap();
//! set.remove(&2).unwrap();
//! let picked = *set.get_random().unwrap();
//! assert!(picked == 1 || picked == 3);
//! ```
//!

#[macro_use]
extern crate log;

pub mod error;
pub mod random_source;
pub mod random_grab_set;

pub use crate::error::GrabSetError;
pub use crate::random_grab_set::RandomGrabSet;
pub use crate::random_source::RandomSource;
