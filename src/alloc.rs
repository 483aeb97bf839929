//! The allocation contract: one trait that every growable container is generic over.
//!
//! A fixed-size pool can be handed a `&'static mut [u8]` once, up front, and never ask for more.
//! That doesn't work for a buffer that needs to grow, shrink, and eventually free itself.
//! [`RawAlloc`] generalizes the "caller supplies the memory operations" idea: a container is
//! generic over `A: RawAlloc` and calls back into it whenever it needs more (or less) storage.
//!
//! [`NoAlloc`] is the zero-sized "no callback installed" case: every container defaults to it,
//! which makes arena/fixed-capacity mode the default and growth an opt-in.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::Error;

/// A single allocation request, in place of the language-neutral spec's one multiplexed
/// `alloc(ctx)` call distinguished by pointer-nullness and size-zero conventions. Rust has no
/// portable way to express "this pointer argument doubles as a discriminant", so the three
/// meanings become three enum variants instead.
pub enum AllocRequest {
    /// Allocate a fresh region.
    New(Layout),
    /// Grow (or shrink, if `new_layout.size() < old_layout.size()`) the region at `ptr` in
    /// place if possible, or move it.
    Resize {
        /// The region's previous address.
        ptr: NonNull<u8>,
        /// The region's previous layout.
        old_layout: Layout,
        /// The region's requested layout.
        new_layout: Layout,
    },
}

/// The allocation contract.
///
/// Implementations must be reentrant with respect to the *calling* container's state: a
/// container never holds a raw pointer into its own storage across a call to [`RawAlloc::alloc`]
/// and reuses it afterward without re-deriving it from the (possibly new) returned pointer.
pub trait RawAlloc {
    /// Services an allocation or resize request, returning the resulting pointer or
    /// [`Error::MemError`] on failure.
    ///
    /// # Safety
    /// For [`AllocRequest::Resize`], `ptr` must have been returned by a previous call to this
    /// same `alloc` with `old_layout`, and must not have been passed to [`RawAlloc::dealloc`] in
    /// the interim.
    unsafe fn alloc(&mut self, request: AllocRequest) -> Result<NonNull<u8>, Error>;

    /// Frees a region previously returned by [`RawAlloc::alloc`]. Freeing never fails.
    ///
    /// # Safety
    /// `ptr` must have been returned by a previous call to [`RawAlloc::alloc`] on this same
    /// allocator with `layout`, and must not already have been freed.
    unsafe fn dealloc(&mut self, ptr: NonNull<u8>, layout: Layout);

    /// Whether this allocator can ever satisfy a request. [`NoAlloc`] overrides this to `false`
    /// so containers can short-circuit a growth attempt without invoking `alloc` and immediately
    /// discarding the error.
    fn can_alloc(&self) -> bool {
        true
    }
}

/// The "non-allocating" allocator: every container defaults to this type parameter, realizing
/// the language-neutral spec's "container initialised with a `NULL` callback" as a distinct,
/// statically-checked type rather than a runtime-`Option` callback.
///
/// A container generic over `NoAlloc` never grows past its initial, caller-provided capacity and
/// never frees its backing storage — the caller owns it, exactly as in arena mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAlloc;

impl RawAlloc for NoAlloc {
    unsafe fn alloc(&mut self, _request: AllocRequest) -> Result<NonNull<u8>, Error> {
        Err(Error::NoAlloc)
    }

    unsafe fn dealloc(&mut self, _ptr: NonNull<u8>, _layout: Layout) {
        // NoAlloc never owns storage; there is nothing to free.
    }

    fn can_alloc(&self) -> bool {
        false
    }
}

/// A [`RawAlloc`] backed by Rust's global allocator, for containers that should actually grow.
///
/// `no_std` by default; this backend is an additive feature rather than the default.
#[cfg(feature = "alloc")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

#[cfg(feature = "alloc")]
impl RawAlloc for Global {
    unsafe fn alloc(&mut self, request: AllocRequest) -> Result<NonNull<u8>, Error> {
        use crate::alloc_crate::alloc::{alloc as raw_alloc, realloc as raw_realloc};

        let ptr = match request {
            AllocRequest::New(layout) => {
                if layout.size() == 0 {
                    return Ok(NonNull::new(layout.align() as *mut u8).unwrap_or(NonNull::dangling()));
                }
                raw_alloc(layout)
            }
            AllocRequest::Resize {
                ptr,
                old_layout,
                new_layout,
            } => {
                debug_assert_eq!(old_layout.align(), new_layout.align());
                if new_layout.size() == 0 {
                    self.dealloc(ptr, old_layout);
                    return Ok(NonNull::dangling());
                }
                raw_realloc(ptr.as_ptr(), old_layout, new_layout.size())
            }
        };

        NonNull::new(ptr).ok_or(Error::MemError)
    }

    unsafe fn dealloc(&mut self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            crate::alloc_crate::alloc::dealloc(ptr.as_ptr(), layout);
        }
    }
}
