//! Ordered, indexable containers of fixed-size elements.
//!
//! A [`Container`] stores opaque elements of a size chosen at construction,
//! copying them in and out by value. Two storage strategies sit behind the
//! same interface:
//!
//! - **array backed**: a ring buffer that doubles its capacity when full.
//!   It has `O(1)` indexing and amortized `O(1)` inserts and removals at
//!   both ends; interior inserts and removals shift slots.
//! - **linked list**: a singly-linked chain of nodes. Every positional
//!   operation walks the container's cursor to the target.
//!
//! Every container owns exactly one [`Cursor`], which supports sequential
//! traversal and in-place insertion, removal and replacement. Direct
//! positional operations keep it in a valid state.
//!
//! # Feature Flags
//! The **linearseq** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd
//!   - Enables trace sinks (`Container::attach_trace`)
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! linearseq = "0.1"
//! ```
//!
//! To use linearseq in a `#![no_std]` crate (an allocator is still
//! required):
//!
//! ```toml
//! [dependencies]
//! linearseq = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! An array-backed container starts with the capacity it was created with,
//! which may be zero, and doubles it (to at least 1) whenever an insert
//! finds it full. Capacity never shrinks. A linked list has no capacity.
//!
//! # Examples
//! ```
//! use linearseq::Container;
//!
//! let mut container = Container::array_backed(10, 4);
//!
//! for v in [10u32, 20, 30].iter() {
//!     container.insert(0, &v.to_le_bytes()).unwrap();
//! }
//!
//! let mut out = [0; 4];
//! container.remove(1, &mut out).unwrap();
//! assert_eq!(u32::from_le_bytes(out), 20);
//!
//! container.insert_last(&40u32.to_le_bytes()).unwrap();
//! container.get(2, &mut out).unwrap();
//! assert_eq!(u32::from_le_bytes(out), 40);
//! assert_eq!(container.len(), 3);
//! ```
//!
//! # Errors
//! ```
//! use linearseq::{Container, Error, SetOutcome};
//!
//! let mut list = Container::linked_list(2);
//!
//! // element slices must be exactly `element_size` bytes
//! assert_eq!(list.insert(0, &[1, 2, 3]), Err(Error::Null));
//! assert_eq!(list.insert(1, &[1, 2]), Err(Error::PositionOutOfRange));
//!
//! list.insert(0, &[1, 2]).unwrap();
//! assert_eq!(list.set(0, &[1, 2]), Ok(SetOutcome::Unchanged));
//! ```
//!
//! # Cursor
//! ```
//! use linearseq::Container;
//!
//! let mut list = Container::linked_list(1);
//! for v in 0..5u8 {
//!     list.insert_last(&[v]).unwrap();
//! }
//!
//! // drop every odd element
//! let mut cursor = list.cursor();
//! cursor.reset();
//! while cursor.has_next() {
//!     let mut out = [0];
//!     cursor.get(&mut out).unwrap();
//!     if out[0] % 2 == 1 {
//!         cursor.discard().unwrap();
//!     } else {
//!         cursor.move_next().unwrap();
//!     }
//! }
//!
//! assert_eq!(format!("{:?}", list), "[[0], [2], [4]]");
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

mod container;
mod cursor;
mod error;
mod list;
mod logic;
mod ring;
#[cfg(feature = "std")]
mod trace;
mod utils;

pub use container::{Container, Kind};
pub use cursor::Cursor;
pub use error::{Error, Result, SetOutcome};
