// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `RandomGrabSet`: a hash set that can hand out a random member.
//! Membership test, insertion, removal and uniform random retrieval are all
//! amortized O(1).
//!
//! Elements live in a dense `Vec`, which makes a random pick a single index
//! draw. A `HashMap` from element to slot makes lookups and removals constant
//! time. Removal moves the last element into the vacated slot, so the order of
//! the dense store is not preserved.

use crate::error::GrabSetError;
use crate::random_source::RandomSource;

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// A hash set with an O(1) uniformly random `get_random`.
///
/// Elements must implement [`Eq`] and [`Hash`], and [`Clone`] because each
/// element is held once in the dense store and once as a key of the position
/// index. Cheap clones (ids, `Rc`, `Arc`) are the intended use. As with
/// `HashSet`, the following must hold:
///
/// ```text
/// k1 == k2 -> hash(k1) == hash(k2)
/// ```
///
/// It is a logic error for an element to be modified in such a way that its
/// hash or its equality changes while it is in the set.
///
/// The set is bound to one [`RandomSource`] for its whole lifetime. It only
/// ever asks the source for an index; it never seeds or resets it. Pass a
/// `&mut` borrow to share a generator that the caller keeps owning.
///
/// # Examples
///
/// ```
/// use grabset::random_grab_set::RandomGrabSet;
/// use grabset::error::GrabSetError;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut peers = RandomGrabSet::new(StdRng::seed_from_u64(17));
///
/// peers.add("alice").unwrap();
/// peers.add("bob").unwrap();
/// peers.add("carol").unwrap();
/// assert_eq!(Err(GrabSetError::DuplicateElement), peers.add("bob"));
///
/// peers.remove("bob").unwrap();
/// assert!(!peers.contains("bob"));
///
/// let picked = *peers.get_random().unwrap();
/// assert!(picked == "alice" || picked == "carol");
/// ```
///
/// [`Eq`]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
/// [`Hash`]: https://doc.rust-lang.org/std/hash/trait.Hash.html
/// [`Clone`]: https://doc.rust-lang.org/std/clone/trait.Clone.html
/// [`RandomSource`]: ../random_source/trait.RandomSource.html
#[derive(Clone)]
pub struct RandomGrabSet<T, R, S = RandomState> {
    store: Vec<T>,
    position: HashMap<T, usize, S>,
    random: R,
}

impl<T, R> RandomGrabSet<T, R, RandomState>
    where T: Eq + Hash + Clone,
          R: RandomSource
{
    /// Creates an empty `RandomGrabSet` that draws from `random`.
    ///
    /// The set does not allocate until it is first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let set: RandomGrabSet<u32, _> = RandomGrabSet::new(StdRng::seed_from_u64(1));
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn new(random: R) -> RandomGrabSet<T, R, RandomState> {
        RandomGrabSet::with_hasher(RandomState::new(), random)
    }

    /// Creates an empty `RandomGrabSet` able to hold at least `capacity`
    /// elements without reallocating either store.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let set: RandomGrabSet<u32, _> = RandomGrabSet::with_capacity(10, StdRng::seed_from_u64(1));
    /// assert!(set.capacity() >= 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize, random: R) -> RandomGrabSet<T, R, RandomState> {
        RandomGrabSet::with_capacity_and_hasher(capacity, RandomState::new(), random)
    }
}

impl<T, R, S> RandomGrabSet<T, R, S>
    where T: Eq + Hash + Clone,
          R: RandomSource,
          S: BuildHasher
{
    /// Creates an empty `RandomGrabSet` whose position index hashes with `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S, random: R) -> RandomGrabSet<T, R, S> {
        RandomGrabSet {
            store: Vec::new(),
            position: HashMap::with_hasher(hasher),
            random,
        }
    }

    /// Creates an empty `RandomGrabSet` with the specified capacity, using
    /// `hasher` for the position index.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S, random: R) -> RandomGrabSet<T, R, S> {
        RandomGrabSet {
            store: Vec::with_capacity(capacity),
            position: HashMap::with_capacity_and_hasher(capacity, hasher),
            random,
        }
    }

    /// Returns a reference to the position index's [`BuildHasher`].
    ///
    /// [`BuildHasher`]: https://doc.rust-lang.org/std/hash/trait.BuildHasher.html
    pub fn hasher(&self) -> &S {
        self.position.hasher()
    }

    /// Returns a reference to the bound random source.
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// Returns a mutable reference to the bound random source.
    ///
    /// The set itself never reseeds the source; this is how the owner does.
    pub fn random_source_mut(&mut self) -> &mut R {
        &mut self.random
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity().min(self.position.capacity())
    }

    /// Reserves capacity for at least `additional` more elements in both stores.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut set: RandomGrabSet<u32, _> = RandomGrabSet::new(StdRng::seed_from_u64(1));
    /// set.reserve(10);
    /// assert!(set.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
        self.position.reserve(additional);
    }

    /// Adds an element to the set.
    ///
    /// The element is appended to the dense store. Fails with
    /// [`GrabSetError::DuplicateElement`] if an equal element is already
    /// present, in which case the set is left untouched and `item` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use grabset::error::GrabSetError;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut set = RandomGrabSet::new(StdRng::seed_from_u64(1));
    /// assert_eq!(Ok(()), set.add(2));
    /// assert_eq!(Err(GrabSetError::DuplicateElement), set.add(2));
    /// assert_eq!(1, set.len());
    /// ```
    ///
    /// [`GrabSetError::DuplicateElement`]: ../error/enum.GrabSetError.html#variant.DuplicateElement
    pub fn add(&mut self, item: T) -> Result<(), GrabSetError> {
        if self.position.contains_key(&item) {
            debug!("rejected duplicate element, size stays {}", self.store.len());
            return Err(GrabSetError::DuplicateElement);
        }
        let slot = self.store.len();
        self.position.insert(item.clone(), slot);
        self.store.push(item);
        debug_assert_eq!(self.position.len(), self.store.len());
        trace!("added element at slot {}, size now {}", slot, self.store.len());
        Ok(())
    }

    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's element type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the element type.
    ///
    /// [`Eq`]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
    /// [`Hash`]: https://doc.rust-lang.org/std/hash/trait.Hash.html
    #[inline]
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Hash + Eq
    {
        self.position.contains_key(value)
    }

    /// Removes a value from the set, returning the stored element.
    ///
    /// The last element of the dense store takes over the vacated slot.
    /// Fails with [`GrabSetError::NotFound`] if the value is not a member;
    /// nothing is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use grabset::error::GrabSetError;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut set = RandomGrabSet::new(StdRng::seed_from_u64(1));
    /// set.add(String::from("x")).unwrap();
    /// assert_eq!(Ok(String::from("x")), set.remove("x"));
    /// assert_eq!(Err(GrabSetError::NotFound), set.remove("x"));
    /// ```
    ///
    /// [`GrabSetError::NotFound`]: ../error/enum.GrabSetError.html#variant.NotFound
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Result<T, GrabSetError>
        where T: Borrow<Q>,
              Q: Hash + Eq
    {
        match self.position.remove(value) {
            Some(slot) => Ok(self.take_slot(slot)),
            None => {
                debug!("rejected removal of absent element, size stays {}", self.store.len());
                Err(GrabSetError::NotFound)
            }
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.position.len(), self.store.len());
        self.store.len()
    }

    /// Returns true if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a uniformly chosen element, drawing the index from the bound
    /// random source.
    ///
    /// Every member has probability `1 / len()` of being returned, provided
    /// the source is uniform. Fails with [`GrabSetError::Empty`] on an empty
    /// set without consulting the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use grabset::error::GrabSetError;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut set = RandomGrabSet::new(StdRng::seed_from_u64(1));
    /// assert_eq!(Err(GrabSetError::Empty), set.get_random());
    /// set.add(5).unwrap();
    /// assert_eq!(Ok(&5), set.get_random());
    /// ```
    ///
    /// [`GrabSetError::Empty`]: ../error/enum.GrabSetError.html#variant.Empty
    pub fn get_random(&mut self) -> Result<&T, GrabSetError> {
        let slot = pick_slot(&mut self.random, self.store.len())?;
        Ok(&self.store[slot])
    }

    /// Like [`get_random`], but draws from `source` instead of the bound
    /// random source, so the set is only borrowed immutably.
    ///
    /// [`get_random`]: #method.get_random
    pub fn random_with<G: RandomSource + ?Sized>(&self, source: &mut G) -> Result<&T, GrabSetError> {
        let slot = pick_slot(source, self.store.len())?;
        Ok(&self.store[slot])
    }

    /// Removes and returns a uniformly chosen element.
    ///
    /// # Examples
    ///
    /// ```
    /// use grabset::random_grab_set::RandomGrabSet;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut set = RandomGrabSet::new(StdRng::seed_from_u64(3));
    /// set.add(1).unwrap();
    /// set.add(2).unwrap();
    /// let taken = set.remove_random().unwrap();
    /// assert!(!set.contains(&taken));
    /// assert_eq!(1, set.len());
    /// ```
    pub fn remove_random(&mut self) -> Result<T, GrabSetError> {
        let slot = pick_slot(&mut self.random, self.store.len())?;
        let item = self.take_slot(slot);
        self.position.remove(&item);
        debug_assert_eq!(self.position.len(), self.store.len());
        Ok(item)
    }

    /// Clears the set, removing all values. The random source is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
        self.position.clear();
        trace!("cleared");
    }

    /// An iterator visiting all elements in the dense store's order.
    ///
    /// That order is unspecified and changes whenever an element is removed.
    pub fn iter(&self) -> Iter<T> {
        Iter { iter: self.store.iter() }
    }

    /// The dense store as a slice. Same ordering caveat as [`iter`].
    ///
    /// [`iter`]: #method.iter
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.store
    }

    /// Checks from scratch that the two stores agree: equal lengths, and every
    /// indexed element sits in the slot recorded for it.
    ///
    /// O(n). Only meant for test harnesses.
    #[doc(hidden)]
    pub fn validate_invariant(&self) -> bool {
        if self.position.len() != self.store.len() {
            return false;
        }
        // distinct keys each matched by their own slot also rules out duplicates in the store
        self.position.iter().all(|(item, &slot)| self.store.get(slot) == Some(item))
    }

    // Caller has already dropped (or is about to drop) the removed element's index entry.
    fn take_slot(&mut self, slot: usize) -> T {
        let item = self.store.swap_remove(slot);
        if let Some(moved) = self.store.get(slot) {
            if let Some(moved_slot) = self.position.get_mut(moved) {
                *moved_slot = slot;
            }
            trace!("moved last element into slot {}", slot);
        }
        trace!("removed element, size now {}", self.store.len());
        item
    }
}

fn pick_slot<G: RandomSource + ?Sized>(source: &mut G, len: usize) -> Result<usize, GrabSetError> {
    if len == 0 {
        return Err(GrabSetError::Empty);
    }
    let slot = source.next_index(len);
    debug_assert!(slot < len, "random source returned {} for bound {}", slot, len);
    Ok(slot)
}

impl<T, R, S> fmt::Debug for RandomGrabSet<T, R, S>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.store.iter()).finish()
    }
}

/// An iterator over the items of a `RandomGrabSet`.
///
/// This `struct` is created by the [`iter`] method on [`RandomGrabSet`].
///
/// [`RandomGrabSet`]: struct.RandomGrabSet.html
/// [`iter`]: struct.RandomGrabSet.html#method.iter
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

/// An owning iterator over the items of a `RandomGrabSet`.
///
/// This `struct` is created by the `into_iter` method on [`RandomGrabSet`]
/// (provided by the `IntoIterator` trait).
///
/// [`RandomGrabSet`]: struct.RandomGrabSet.html
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<'a, T, R, S> IntoIterator for &'a RandomGrabSet<T, R, S>
    where T: Eq + Hash + Clone,
          R: RandomSource,
          S: BuildHasher
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, R, S> IntoIterator for RandomGrabSet<T, R, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.store.into_iter() }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
