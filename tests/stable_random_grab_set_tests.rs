// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

extern crate grabset;

use grabset::error::GrabSetError;
use grabset::random_grab_set::RandomGrabSet;
use grabset::random_source::RandomSource;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
struct Peer {
    host: String,
    port: u16,
}

fn peer(host: &str, port: u16) -> Peer {
    Peer { host: host.to_string(), port }
}

#[test]
fn test_one_two_three() {
    init_logging();
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(1));
    set.add(1).unwrap();
    set.add(2).unwrap();
    set.add(3).unwrap();
    assert_eq!(3, set.len());
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));

    set.remove(&2).unwrap();
    assert_eq!(2, set.len());
    assert!(!set.contains(&2));
    assert!(set.contains(&1));
    assert!(set.contains(&3));

    for _ in 0..1000 {
        let picked = *set.get_random().unwrap();
        assert!(picked == 1 || picked == 3);
    }

    assert_eq!(Err(GrabSetError::NotFound), set.remove(&2));
    assert_eq!(Err(GrabSetError::DuplicateElement), set.add(1));
    assert_eq!(2, set.len());
    assert!(set.validate_invariant());
}

#[test]
fn test_custom_element() {
    init_logging();
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(2));
    set.add(peer("10.0.0.1", 80)).unwrap();
    set.add(peer("10.0.0.1", 443)).unwrap();
    set.add(peer("10.0.0.2", 80)).unwrap();
    assert_eq!(Err(GrabSetError::DuplicateElement), set.add(peer("10.0.0.1", 443)));

    assert_eq!(Ok(peer("10.0.0.1", 80)), set.remove(&peer("10.0.0.1", 80)));
    assert!(set.contains(&peer("10.0.0.1", 443)));
    assert!(set.contains(&peer("10.0.0.2", 80)));
    assert!(set.validate_invariant());
}

#[test]
fn test_shared_elements_stay_with_owner() {
    let owned: Vec<Rc<String>> = (0..4).map(|i| Rc::new(format!("candidate-{}", i))).collect();
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(3));
    for c in &owned {
        set.add(Rc::clone(c)).unwrap();
    }
    set.remove(&owned[1]).unwrap();
    drop(set);
    assert_eq!(1, Rc::strong_count(&owned[1]));
    assert_eq!("candidate-1", owned[1].as_str());
}

#[test]
fn test_size_accounting() {
    init_logging();
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(4));
    let mut adds = 0usize;
    let mut removes = 0usize;
    for i in 0..500u32 {
        if set.add(i % 173).is_ok() {
            adds += 1;
        }
        if i % 5 == 0 && set.remove(&(i / 2)).is_ok() {
            removes += 1;
        }
        assert_eq!(adds - removes, set.len());
    }
    assert!(set.validate_invariant());
}

#[test]
fn test_swap_delete_keeps_others_retrievable() {
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(5));
    for i in 0..10usize {
        set.add(i).unwrap();
    }
    set.remove(&0).unwrap();
    set.remove(&4).unwrap();
    for i in (0..10).filter(|&i| i != 0 && i != 4) {
        assert!(set.contains(&i));
    }
    let mut seen = [false; 10];
    for _ in 0..2000 {
        seen[*set.get_random().unwrap()] = true;
    }
    let expected: Vec<bool> = (0..10).map(|i| i != 0 && i != 4).collect();
    assert_eq!(expected, seen.to_vec());
}

#[test]
fn test_uniform_chi_square() {
    const K: usize = 8;
    const N: usize = 80_000;
    let mut set = RandomGrabSet::new(StdRng::seed_from_u64(0xC0FFEE));
    // holes from removals must not skew the draw
    for i in 0..(K as u32 + 4) {
        set.add(i).unwrap();
    }
    for i in &[0u32, 3, 7, 10] {
        set.remove(i).unwrap();
    }
    assert_eq!(K, set.len());

    let mut counts: HashMap<u32, usize> = HashMap::new();
    for _ in 0..N {
        *counts.entry(*set.get_random().unwrap()).or_insert(0) += 1;
    }
    assert_eq!(K, counts.len());

    let expected = N as f64 / K as f64;
    let chi_square: f64 = counts.values()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    // 7 degrees of freedom, 0.0001 critical value
    assert!(chi_square < 29.88, "chi square {} too high: {:?}", chi_square, counts);
}

#[test]
fn test_borrowed_shared_generator() {
    let mut rng = StdRng::seed_from_u64(6);
    {
        let mut a = RandomGrabSet::new(&mut rng);
        a.add('a').unwrap();
        a.add('b').unwrap();
        assert!(a.get_random().is_ok());
    }
    let mut other = RandomGrabSet::new(StdRng::seed_from_u64(7));
    other.add(1u8).unwrap();
    assert_eq!(Ok(&1), other.random_with(&mut rng));
}

struct Countdown(usize);

impl RandomSource for Countdown {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_sub(1);
        self.0 % bound
    }
}

#[test]
fn test_remove_random_drains() {
    let mut set = RandomGrabSet::new(Countdown(1000));
    for i in 0..50 {
        set.add(i).unwrap();
    }
    let mut taken = Vec::new();
    while let Ok(i) = set.remove_random() {
        assert!(!set.contains(&i));
        assert!(set.validate_invariant());
        taken.push(i);
    }
    assert!(set.is_empty());
    assert_eq!(Err(GrabSetError::Empty), set.get_random());
    taken.sort();
    assert_eq!((0..50).collect::<Vec<_>>(), taken);
}

#[test]
fn test_error_messages() {
    assert_eq!("element is already present in the set", GrabSetError::DuplicateElement.to_string());
    assert_eq!("element is not present in the set", GrabSetError::NotFound.to_string());
    assert_eq!("cannot pick a random element from an empty set", GrabSetError::Empty.to_string());
}
