//! Property-based testing for the sequence implementations
//!
//! Random operation sequences are replayed against `Vec<i32>` as the model;
//! after every operation the structure must agree with the model and the
//! dynamic array must sit inside its resize window.

use proptest::prelude::*;
use seqset::{ArraySequence, DynamicArraySequence, LinkedListSequence, Sequence};

// =============================================================================
// OPERATION STRATEGY
// =============================================================================

#[derive(Debug, Clone)]
enum SeqOp {
    InsertAt(usize, i32),
    DeleteAt(usize),
    InsertFirst(i32),
    InsertLast(i32),
    DeleteFirst,
    DeleteLast,
    SetAt(usize, i32),
}

fn seq_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    prop::collection::vec(
        prop_oneof![
            (any::<usize>(), any::<i32>()).prop_map(|(i, x)| SeqOp::InsertAt(i, x)),
            any::<usize>().prop_map(SeqOp::DeleteAt),
            any::<i32>().prop_map(SeqOp::InsertFirst),
            any::<i32>().prop_map(SeqOp::InsertLast),
            Just(SeqOp::DeleteFirst),
            Just(SeqOp::DeleteLast),
            (any::<usize>(), any::<i32>()).prop_map(|(i, x)| SeqOp::SetAt(i, x)),
        ],
        0..max_ops,
    )
}

/// Replay one op against the sequence and the model, folding random indices
/// into the currently valid range. Delete/set on an empty sequence must fail.
fn apply<S: Sequence<i32>>(seq: &mut S, model: &mut Vec<i32>, op: &SeqOp) {
    match op {
        SeqOp::InsertAt(i, x) => {
            let index = i % (model.len() + 1);
            seq.insert_at(index, *x).unwrap();
            model.insert(index, *x);
        }
        SeqOp::DeleteAt(i) => {
            if model.is_empty() {
                assert!(seq.delete_at(0).is_err());
            } else {
                let index = i % model.len();
                assert_eq!(seq.delete_at(index).unwrap(), model.remove(index));
            }
        }
        SeqOp::InsertFirst(x) => {
            seq.insert_first(*x).unwrap();
            model.insert(0, *x);
        }
        SeqOp::InsertLast(x) => {
            seq.insert_last(*x).unwrap();
            model.push(*x);
        }
        SeqOp::DeleteFirst => {
            if model.is_empty() {
                assert!(seq.delete_first().is_err());
            } else {
                assert_eq!(seq.delete_first().unwrap(), model.remove(0));
            }
        }
        SeqOp::DeleteLast => {
            if model.is_empty() {
                assert!(seq.delete_last().is_err());
            } else {
                assert_eq!(seq.delete_last().unwrap(), model.pop().unwrap());
            }
        }
        SeqOp::SetAt(i, x) => {
            if model.is_empty() {
                assert!(seq.set_at(0, *x).is_err());
            } else {
                let index = i % model.len();
                seq.set_at(index, *x).unwrap();
                model[index] = *x;
            }
        }
    }
}

fn contents<S: Sequence<i32>>(seq: &S) -> Vec<i32> {
    (0..seq.len()).map(|i| *seq.get_at(i).unwrap()).collect()
}

// =============================================================================
// DYNAMIC ARRAY SEQUENCE
// =============================================================================

proptest! {
    #[test]
    fn prop_dynamic_matches_model(ops in seq_ops_strategy(200)) {
        let mut seq = DynamicArraySequence::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut seq, &mut model, op);
            prop_assert_eq!(seq.len(), model.len());
        }
        prop_assert_eq!(contents(&seq), model);
    }

    #[test]
    fn prop_dynamic_resize_window_invariant(ops in seq_ops_strategy(300)) {
        let mut seq = DynamicArraySequence::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut seq, &mut model, op);
            let (len, cap) = (seq.len(), seq.capacity());
            // lower = capacity / r², upper = capacity, with r = 2
            prop_assert!(cap / 4 <= len, "size {} fell below lower bound of capacity {}", len, cap);
            prop_assert!(len <= cap, "size {} exceeds capacity {}", len, cap);
        }
    }

    #[test]
    fn prop_dynamic_append_reallocations_logarithmic(n in 1usize..2000) {
        let mut seq = DynamicArraySequence::new();
        for i in 0..n {
            seq.insert_last(i as i32).unwrap();
        }
        let bound = usize::BITS as usize - n.leading_zeros() as usize + 2;
        prop_assert!(
            seq.reallocation_count() <= bound,
            "{} reallocations for {} appends",
            seq.reallocation_count(),
            n
        );
    }

    #[test]
    fn prop_build_round_trip(items in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut seq = DynamicArraySequence::new();
        seq.build(items.clone()).unwrap();
        prop_assert_eq!(contents(&seq), items);
    }

    #[test]
    fn prop_insert_at_len_equals_insert_last(
        items in prop::collection::vec(any::<i32>(), 0..100),
        extra in any::<i32>(),
    ) {
        let mut a = DynamicArraySequence::new();
        let mut b = DynamicArraySequence::new();
        a.build(items.clone()).unwrap();
        b.build(items).unwrap();

        a.insert_at(a.len(), extra).unwrap();
        b.insert_last(extra).unwrap();
        prop_assert_eq!(contents(&a), contents(&b));
        prop_assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn prop_delete_at_zero_equals_delete_first(
        items in prop::collection::vec(any::<i32>(), 1..100),
    ) {
        let mut a = DynamicArraySequence::new();
        let mut b = DynamicArraySequence::new();
        a.build(items.clone()).unwrap();
        b.build(items).unwrap();

        prop_assert_eq!(a.delete_at(0).unwrap(), b.delete_first().unwrap());
        prop_assert_eq!(contents(&a), contents(&b));
        prop_assert_eq!(a.capacity(), b.capacity());
    }
}

// =============================================================================
// CROSS-MODEL EQUIVALENCE
// =============================================================================

proptest! {
    #[test]
    fn prop_all_sequences_agree(ops in seq_ops_strategy(100)) {
        let mut dynamic = DynamicArraySequence::new();
        let mut array = ArraySequence::new();
        let mut linked = LinkedListSequence::new();
        let mut model = Vec::new();

        for op in &ops {
            let mut shadow_a = model.clone();
            let mut shadow_b = model.clone();
            apply(&mut dynamic, &mut model, op);
            apply(&mut array, &mut shadow_a, op);
            apply(&mut linked, &mut shadow_b, op);
        }
        prop_assert_eq!(contents(&dynamic), model.clone());
        prop_assert_eq!(contents(&array), model.clone());
        prop_assert_eq!(contents(&linked), model);
    }

    #[test]
    fn prop_array_sequence_exact_fit(ops in seq_ops_strategy(60)) {
        let mut seq = ArraySequence::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut seq, &mut model, op);
            prop_assert_eq!(seq.capacity(), seq.len());
        }
    }
}

// =============================================================================
// AMORTIZATION SCENARIOS
// =============================================================================

#[test]
fn alternating_ops_at_boundary_do_not_thrash() {
    let mut seq = DynamicArraySequence::new();
    seq.build((0..64).collect()).unwrap();
    let before = seq.reallocation_count();

    for _ in 0..1000 {
        seq.insert_last(0).unwrap();
        seq.delete_last().unwrap();
    }
    // the hysteresis band keeps 2000 boundary crossings allocation-free
    assert!(seq.reallocation_count() <= before + 1);
}

#[test]
fn drain_shrinks_capacity_geometrically() {
    let mut seq = DynamicArraySequence::new();
    seq.build((0..1024).collect()).unwrap();

    while !seq.is_empty() {
        seq.delete_last().unwrap();
        assert!(seq.capacity() / 4 <= seq.len());
    }
    // fully drained: capacity has collapsed with the size
    assert!(seq.capacity() <= 2);
}
