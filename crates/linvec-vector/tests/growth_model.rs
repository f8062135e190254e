//! Integration test: model-based checking of the growth engine.
//!
//! Random sequences of push / reserve / resize / clear / take are applied
//! both to a `Vector<i64>` and to a plain `Vec<i64>` model. After every
//! step the valid elements must agree, and capacity must follow the
//! exact-reservation and doubling rules.

use linvec_vector::Vector;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Push(i64),
    Reserve(usize),
    Resize(usize),
    Clear,
    Take,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => any::<i64>().prop_map(Step::Push),
        1 => (0usize..64).prop_map(Step::Reserve),
        2 => (0usize..64).prop_map(Step::Resize),
        1 => Just(Step::Clear),
        1 => Just(Step::Take),
    ]
}

proptest! {
    #[test]
    fn vector_tracks_vec_model(steps in prop::collection::vec(arb_step(), 0..200)) {
        let mut v: Vector<i64> = Vector::new();
        let mut model: Vec<i64> = Vec::new();

        for step in steps {
            let cap_before = v.capacity();
            let len_before = v.len();
            match step {
                Step::Push(x) => {
                    v.push(x);
                    model.push(x);
                    if len_before == cap_before {
                        prop_assert_eq!(v.capacity(), (2 * cap_before).max(1));
                    } else {
                        prop_assert_eq!(v.capacity(), cap_before);
                    }
                }
                Step::Reserve(n) => {
                    v.reserve(n).unwrap();
                    prop_assert_eq!(v.capacity(), cap_before.max(n));
                }
                Step::Resize(n) => {
                    v.resize(n).unwrap();
                    model.resize(n, 0);
                    if n < len_before {
                        prop_assert_eq!(v.capacity(), n);
                    } else {
                        prop_assert_eq!(v.capacity(), cap_before.max(n));
                    }
                }
                Step::Clear => {
                    v.clear();
                    model.clear();
                    prop_assert_eq!(v.capacity(), 0);
                }
                Step::Take => {
                    let taken = v.take();
                    prop_assert_eq!(taken.as_slice(), model.as_slice());
                    prop_assert_eq!(taken.capacity(), cap_before);
                    prop_assert_eq!(v.capacity(), 0);
                    model.clear();
                }
            }
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_preserves_order_and_capacity_is_monotonic(items in prop::collection::vec(any::<u16>(), 0..500)) {
        let mut v = Vector::new();
        let mut last_cap = 0;
        for &x in &items {
            v.push(x);
            prop_assert!(v.capacity() >= last_cap);
            last_cap = v.capacity();
        }
        prop_assert_eq!(v.len(), items.len());
        prop_assert_eq!(v.as_slice(), items.as_slice());
    }

    #[test]
    fn resize_larger_preserves_prefix(items in prop::collection::vec(any::<i32>(), 0..64), extra in 0usize..64) {
        let mut v = Vector::from_slice(&items).unwrap();
        v.resize(items.len() + extra).unwrap();
        prop_assert_eq!(&v.as_slice()[..items.len()], items.as_slice());
        prop_assert!(v.as_slice()[items.len()..].iter().all(|&x| x == 0));
    }

    #[test]
    fn clone_is_independent(items in prop::collection::vec(any::<i32>(), 1..64)) {
        let original = Vector::from_slice(&items).unwrap();
        let mut copy = original.clone();
        copy[0] = copy[0].wrapping_add(1);
        prop_assert_eq!(original.as_slice(), items.as_slice());
        prop_assert_ne!(copy, original);
    }
}

#[test]
fn moved_from_vector_is_reusable() {
    let mut source = Vector::filled(4, 2.5f32).unwrap();
    let adopted = std::mem::take(&mut source);
    assert_eq!(adopted.len(), 4);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);
    source.push(1.0);
    assert_eq!(source.as_slice(), &[1.0]);
}
