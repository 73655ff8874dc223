use std::collections::VecDeque;

use cyclebuf::RingBuffer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(u8),
    PushFront(u8),
    PopBack,
    PopFront,
    Insert(u8, u8),
    EraseAt(u8),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(Operation::PushBack),
        any::<u8>().prop_map(Operation::PushFront),
        Just(Operation::PopBack),
        Just(Operation::PopFront),
        (any::<u8>(), any::<u8>()).prop_map(|(at, v)| Operation::Insert(at, v)),
        any::<u8>().prop_map(Operation::EraseAt),
        Just(Operation::Clear),
    ]
}

proptest! {
    #[test]
    fn ring_matches_std_vec_deque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model: VecDeque<u8> = VecDeque::new();
        let mut ring: RingBuffer<u8> = RingBuffer::new();

        for op in ops {
            match op {
                Operation::PushBack(v) => {
                    model.push_back(v);
                    ring.push_back(v);
                }
                Operation::PushFront(v) => {
                    model.push_front(v);
                    ring.push_front(v);
                }
                Operation::PopBack => {
                    assert_eq!(ring.pop_back(), model.pop_back());
                }
                Operation::PopFront => {
                    assert_eq!(ring.pop_front(), model.pop_front());
                }
                Operation::Insert(at, v) => {
                    let at = at as usize % (model.len() + 1);
                    model.insert(at, v);
                    ring.insert(at, v).unwrap();
                }
                Operation::EraseAt(at) => {
                    if !model.is_empty() {
                        let at = at as usize % model.len();
                        model.remove(at);
                        ring.erase_at(at);
                    }
                }
                Operation::Clear => {
                    model.clear();
                    ring.clear();
                }
            }

            assert_eq!(ring.len(), model.len());
            assert_eq!(ring.front(), model.front());
            assert_eq!(ring.back(), model.back());
        }

        let from_ring: Vec<_> = ring.iter().copied().collect();
        let from_model: Vec<_> = model.iter().copied().collect();
        assert_eq!(from_ring, from_model);

        let (first, second) = ring.as_slices();
        let stitched: Vec<_> = first.iter().chain(second).copied().collect();
        assert_eq!(stitched, from_model);
    }

    #[test]
    fn cursor_distances_stay_consistent(
        rotation in 0usize..16,
        len in 0usize..12,
    ) {
        // Rotate the live region so many cases straddle the wrap boundary.
        let mut ring = RingBuffer::with_capacity(12);
        for _ in 0..rotation {
            ring.push_back(0u8);
            ring.pop_front();
        }
        for i in 0..len {
            ring.push_back(i as u8);
        }

        let signed_len = len as isize;
        for i in 0..=signed_len {
            for j in 0..=signed_len {
                let a = ring.cursor(i as usize);
                let b = ring.cursor(j as usize);
                prop_assert_eq!(b.offset_from(&a), j - i);
                prop_assert_eq!(a < b, i < j);
                prop_assert_eq!(a == b, i == j);
            }
        }

        for i in 0..=signed_len {
            let begin = ring.cursor_begin();
            let cursor = begin.offset(i).unwrap();
            prop_assert_eq!(cursor.index(), i as usize);
            if i < signed_len {
                prop_assert_eq!(*cursor.get().unwrap(), i as u8);
            }
        }
    }
}
