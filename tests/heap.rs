//! Black-box end-to-end scenarios for the flat priority queue, against the public API only.

#![cfg(feature = "alloc")]

use coral_core::{BinaryHeap, HeapOrder};

fn min_heap() -> BinaryHeap<i32, fn(&i32, &i32) -> std::cmp::Ordering, coral_core::alloc::Global> {
    BinaryHeap::new(HeapOrder::Min, |a: &i32, b: &i32| a.cmp(b), coral_core::alloc::Global)
}

#[test]
fn min_heap_push_pop_order() {
    let mut heap = min_heap();
    for x in [5, 1, 4, 2, 3] {
        heap.push(x).unwrap();
    }
    let mut out = Vec::new();
    while let Some(x) = heap.pop() {
        out.push(x);
    }
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
}

#[test]
fn heapify_then_heapsort() {
    let mut heap = min_heap();
    heap.heapify_from([9, 3, 7, 1, 8, 2, 6, 4, 5]).unwrap();
    assert_eq!(*heap.peek().unwrap(), 1);

    let sorted = heap.into_sorted_buffer();
    assert_eq!(sorted.as_slice(), &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
}
