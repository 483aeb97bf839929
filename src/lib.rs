//! In-process data-structure engines built on one shared allocation primitive.
//!
//! This crate provides four pieces, each usable standalone:
//!
//! - [`buffer::Buffer`] — a contiguous, typed slab with pluggable growth: the substrate the other
//!   three are built from.
//! - [`heap::BinaryHeap`] — a flat binary min/max heap over a `Buffer`, ordered by a caller-supplied
//!   comparator rather than requiring `T: Ord`.
//! - [`deque::RingDeque`] — a flat double-ended queue (ring buffer) with push/pop at both ends and,
//!   in fixed-capacity mode, overwrite-on-full semantics instead of failure.
//! - [`list::LinkedList`] — a sentinel-based intrusive doubly linked list with O(1) splice.
//!
//! Every growable type is generic over an allocator trait, [`alloc::RawAlloc`]. The default type
//! parameter, [`alloc::NoAlloc`], makes every container an arena by default: it never calls back
//! into anything and every operation that would need more memory than the caller originally
//! provided fails with [`error::Error::NoAlloc`] instead of panicking. Enabling the `alloc`
//! feature brings in [`alloc::Global`], a `RawAlloc` backed by the Rust global allocator, for
//! containers that should grow like `Vec` does.
//!
//! # Cargo features
//!
//! - `alloc` — enables [`alloc::Global`], so containers can be parameterized to grow via the
//!   global allocator instead of running strictly in arena mode.
//! - `std` — pulls in `alloc`; reserved for the `std`-only pieces of the test harness.
//!
//! With no features enabled, this crate is `no_std` and never allocates: every container stays
//! fixed at whatever capacity the caller hands it via [`buffer::Buffer::from_static_mut`] or an
//! equivalent arena constructor.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;
pub mod buffer;
pub mod deque;
pub mod error;
pub mod heap;
pub mod list;
mod raw;

pub use crate::alloc::{AllocRequest, NoAlloc, RawAlloc};
pub use crate::buffer::Buffer;
pub use crate::deque::RingDeque;
pub use crate::error::{Error, ValidationError};
pub use crate::heap::{BinaryHeap, HeapOrder};
pub use crate::list::LinkedList;
