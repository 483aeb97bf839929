//! The shared low-level allocation substrate underneath [`crate::buffer::Buffer`] and
//! [`crate::deque::RingDeque`].
//!
//! `Buffer` tracks a single monotonic `count` of initialized slots starting at index 0 — a good
//! fit for a stack-like structure. `RingDeque` needs initialized slots to live anywhere in
//! `[0, capacity)` depending on `front`, so it cannot reuse `Buffer`'s count-from-zero bookkeeping
//! directly. Both containers do share the same "typed slab behind an `A: RawAlloc`, grow by
//! doubling, shrink/free explicitly" substrate, which is what this module factors out. `RawStore`
//! itself knows nothing about which slots are initialized — that bookkeeping, and therefore
//! `Drop`, belongs to the container built on top.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc::{AllocRequest, NoAlloc, RawAlloc};
use crate::error::Error;

/// Smallest capacity a store grows to the first time it grows from zero.
pub(crate) const MIN_CAPACITY: usize = 8;

pub(crate) struct RawStore<T, A: RawAlloc = NoAlloc> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) capacity: usize,
    pub(crate) alloc: A,
}

unsafe impl<T: Send, A: RawAlloc + Send> Send for RawStore<T, A> {}

impl<T, A: RawAlloc> RawStore<T, A> {
    pub(crate) fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("capacity overflows isize::MAX bytes")
    }

    pub(crate) const fn new(alloc: A) -> Self {
        RawStore {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
        }
    }

    /// Wraps caller-provided, `'static` storage: fixed capacity, no allocator ever consulted.
    pub(crate) fn from_static_mut(mem: &'static mut [core::mem::MaybeUninit<T>]) -> RawStore<T, NoAlloc> {
        let ptr = NonNull::new(mem.as_mut_ptr() as *mut T).unwrap_or(NonNull::dangling());
        RawStore {
            ptr,
            capacity: mem.len(),
            alloc: NoAlloc,
        }
    }

    pub(crate) unsafe fn slot_ptr(&self, i: usize) -> *mut T {
        debug_assert!(i < self.capacity);
        self.ptr.as_ptr().add(i)
    }

    /// Grows or shrinks to exactly `new_capacity`, preserving the first
    /// `min(new_capacity, old_capacity)` slots' *bytes* verbatim (the caller is responsible for
    /// having already relocated/dropped anything that needs different treatment, since
    /// `RawStore` does not know which slots hold live values).
    pub(crate) fn set_capacity(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity == self.capacity {
            return Ok(());
        }

        if new_capacity == 0 {
            if self.capacity != 0 {
                unsafe {
                    self.alloc.dealloc(self.ptr.cast(), Self::layout(self.capacity));
                }
            }
            self.ptr = NonNull::dangling();
            self.capacity = 0;
            return Ok(());
        }

        if !self.alloc.can_alloc() {
            return Err(Error::NoAlloc);
        }

        let new_layout = Self::layout(new_capacity);
        let new_ptr = unsafe {
            if self.capacity == 0 {
                self.alloc.alloc(AllocRequest::New(new_layout))
            } else {
                self.alloc.alloc(AllocRequest::Resize {
                    ptr: self.ptr.cast(),
                    old_layout: Self::layout(self.capacity),
                    new_layout,
                })
            }
        }?;

        self.ptr = new_ptr.cast();
        self.capacity = new_capacity;
        Ok(())
    }

    /// Frees the backing allocation without running any element destructors. The caller must
    /// have already dropped every live `T` in `[0, capacity)` it cares about.
    pub(crate) fn dealloc_only(&mut self) {
        if self.capacity != 0 {
            unsafe {
                self.alloc.dealloc(self.ptr.cast(), Self::layout(self.capacity));
            }
            self.ptr = NonNull::dangling();
            self.capacity = 0;
        }
    }
}
