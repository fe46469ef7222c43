//! Contiguous growable array with explicit raw-storage control.
//!
//! This crate provides a vector built for systems that want precise control
//! over when memory is allocated and when element lifetimes begin and end.
//! The key split: allocating raw storage and constructing a live element are
//! separate operations, never bundled.
//!
//! # Design Philosophy
//!
//! A block of storage is described by three cursors:
//!
//! ```text
//! ptr            ptr + len          ptr + cap
//!  │  live elements  │   raw storage   │
//!  ▼                 ▼                 ▼
//!  ┌─────────────────┬─────────────────┐
//!  │ constructed     │ allocated only  │
//!  └─────────────────┴─────────────────┘
//! ```
//!
//! Slots left of `len` hold constructed elements; slots right of it are
//! allocated but hold nothing. Element lifetimes are driven explicitly
//! through the [`construct`]/[`destroy`] primitives, and destruction of
//! types without drop glue is a guaranteed no-op, not merely a fast path.
//!
//! Benefits:
//! - **Strong failure guarantee**: every reallocating mutation either
//!   completes or leaves the vector exactly as it was, even when element
//!   clone code panics or the allocator fails
//! - **Pluggable allocation**: storage comes from a [`RawAlloc`] parameter,
//!   so counting, failing, or arena allocators are a type argument away
//! - **Zero teardown for scalar types**: clearing a vector of `u64` does no
//!   per-element work, by contract
//! - **Slice everywhere**: the live range derefs to `[T]`, so indexing,
//!   iteration, and search come from the standard slice API
//!
//! # Quick Start
//!
//! ```
//! use nexus_vec::Vec;
//!
//! let mut v: Vec<u32> = Vec::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//!
//! v.insert_fill(1, 2, &99);
//! assert_eq!(v, [1, 99, 99, 2, 3]);
//!
//! v.remove_range(1..3);
//! assert_eq!(v, [1, 2, 3]);
//! ```
//!
//! # Failure Contract
//!
//! Operations that may reallocate (`push`, `insert`, `insert_from_slice`,
//! `insert_fill`, `reserve`, `resize`, `clone_from`) are all-or-nothing: a
//! panic from an element's `Clone`, or an allocator failure on the `try_*`
//! surface, leaves size, capacity, and contents untouched, with nothing
//! leaked and nothing destroyed twice. The single-pass paths
//! ([`Vec::insert_iter`], [`Extend::extend`], [`Vec::resize_with`]) cannot
//! know their element count up front and instead keep the already-inserted
//! prefix on failure; that narrower contract is documented on each.
//!
//! # Concurrency
//!
//! A vector is not internally synchronized. It is `Send`/`Sync` when the
//! element type is, and shared mutation requires external exclusion, same
//! as any `&mut`-based structure.

mod alloc;
mod iter;
mod raw;
mod vec;

pub use alloc::{AllocError, Global, RawAlloc};
pub use iter::IntoIter;
pub use raw::{construct, construct_fill, construct_slice, destroy, destroy_range};
pub use vec::{PushError, ReserveError, Vec};
