//! Black-box end-to-end scenarios for the flat double-ended queue, against the public API only.

use std::mem::MaybeUninit;

use coral_core::RingDeque;

fn fixed_deque<T>(cap: usize) -> RingDeque<T, coral_core::alloc::NoAlloc> {
    let mem: &'static mut [MaybeUninit<T>] = Box::leak(
        (0..cap).map(|_| MaybeUninit::uninit()).collect::<Vec<_>>().into_boxed_slice(),
    );
    RingDeque::from_static_mut(mem)
}

#[test]
fn ring_overwrite_on_push_back() {
    let mut d = fixed_deque::<i32>(4);
    for x in [10, 20, 30, 40, 50] {
        d.push_back(x).unwrap();
    }
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![20, 30, 40, 50]);
}

#[test]
fn range_push_front_then_overwrite() {
    let mut d = fixed_deque::<char>(4);
    d.extend_front(['A', 'B', 'C']).unwrap();
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec!['A', 'B', 'C']);

    d.push_front('X').unwrap();
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec!['X', 'A', 'B', 'C']);

    d.push_front('Y').unwrap();
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec!['Y', 'X', 'A', 'B']);
}

#[test]
fn insert_range_interior_overwrite_bound() {
    // Fixed capacity 4, already full: [1,2,3,4]. Insert [9,9] at index 2.
    let mut d = fixed_deque::<i32>(4);
    for x in [1, 2, 3, 4] {
        d.push_back(x).unwrap();
    }
    d.insert_range(2, [9, 9]).unwrap();
    d.validate().unwrap();
    assert_eq!(d.len(), 4);
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![9, 9, 3, 4]);
}
