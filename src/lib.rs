//! # `optional` - Single-Consumption Optional Value Cell
//!
//! [`Optional<T>`] holds either exactly one `T` or nothing. It works for any
//! payload, including types that are neither `Default` nor `Clone`, and keeps
//! ownership explicit: reading the value out empties the cell.
//!
//! ## Operation Set
//!
//! - **Construction**: [`Optional::none`], [`Optional::NONE`], [`Optional::some`].
//! - **Inspection**: [`Optional::is_some`], [`Optional::is_none`], [`Optional::peek`].
//! - **Non-consuming callbacks**: [`Optional::if_some`], [`Optional::if_some_mut`],
//!   [`Optional::if_none`]. All return the cell for chaining.
//! - **Consuming accessors**: [`Optional::unwrap`], [`Optional::expect`],
//!   [`Optional::unwrap_or`], [`Optional::unwrap_def`], [`Optional::match_with`].
//!   Each leaves the cell empty.
//! - **Transfer**: [`Optional::transfer`] and [`Optional::assign_from`] move a
//!   value between cells and drain the source. [`Clone`] duplicates without
//!   draining and requires `T: Clone`.
//!
//! ## Errors
//!
//! The only failure is reading an empty cell through `unwrap`/`expect`, which
//! returns [`EmptyValueAccess`]. A failed read never mutates the cell. The
//! `_as` variants ([`Optional::unwrap_as`], [`Optional::expect_as`]) convert
//! the failure into any error type implementing `From<EmptyValueAccess>`.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for consuming accessors, transfers and
//!   empty reads.
//! - `proptest`: `Arbitrary` support and the `strategy` module.
//!
//! ## Example
//!
//! ```rust
//! use optional::Optional;
//!
//! let mut cell = Optional::some(String::from("payload"));
//! assert!(cell.is_some());
//!
//! let value = cell.unwrap().unwrap();
//! assert_eq!(value, "payload");
//!
//! // The cell has been consumed.
//! assert!(cell.is_none());
//! assert_eq!(cell.unwrap_def(String::from("fallback")), "fallback");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

#[macro_use]
mod trace;

pub mod error;
pub mod optional;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::EmptyValueAccess;
pub use optional::Optional;

// Compile-time layout assertions: the cell is a zero-overhead wrapper.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Optional<u64>>() == mem::size_of::<Option<u64>>());
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<Option<u64>>());

    // Niche optimization survives the wrapper.
    assert!(mem::size_of::<Optional<Box<u8>>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Optional<core::num::NonZeroU32>>() == mem::size_of::<u32>());

    // Empty payloads stay tiny.
    assert!(mem::size_of::<Optional<()>>() == 1);
};
