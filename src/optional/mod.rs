//! `Optional` — a single-slot value cell that is either populated or empty.
//!
//! The implementation is split into small submodules by responsibility:
//! - `ops_inspect`: predicates, borrows and non-consuming callbacks.
//! - `ops_consume`: accessors that move the value out and leave the cell empty.
//! - `ops_transfer`: draining moves between cells and whole-state assignment.
//! - `traits`: equality, cloning, formatting and conversions.
//!
//! ## Core invariant
//! The slot holds a live `T` *exactly when* the cell is populated. Every
//! consuming accessor leaves the slot empty, and dropping the cell drops the
//! payload if one is still present. The slot is a plain sum type, so no code
//! path can construct or drop a payload twice.

mod ops_consume;
mod ops_inspect;
mod ops_transfer;
mod traits;

/// An optional value cell: holds either exactly one `T` or nothing.
///
/// Reading the value out is a *consuming* operation. After [`unwrap`],
/// [`expect`], [`unwrap_or`], [`unwrap_def`] or [`match_with`] the cell is
/// empty, but it remains usable and can be repopulated through
/// [`assign_from`].
///
/// No bounds are placed on `T`: payloads need not be `Default`, `Clone` or
/// `Copy`. Duplication ([`Clone`]) and comparison ([`PartialEq`]) are
/// available only when the payload supports them.
///
/// [`unwrap`]: Optional::unwrap
/// [`expect`]: Optional::expect
/// [`unwrap_or`]: Optional::unwrap_or
/// [`unwrap_def`]: Optional::unwrap_def
/// [`match_with`]: Optional::match_with
/// [`assign_from`]: Optional::assign_from
#[repr(transparent)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// An empty cell, usable in `const` contexts.
    pub const NONE: Self = Self { slot: None };

    /// Creates an empty cell.
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Creates a cell populated with `value`.
    ///
    /// To keep using the original, pass a clone: `Optional::some(value.clone())`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Converts the cell into a core [`Option`], consuming it.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoDefault(&'static str);

    #[test]
    fn constructors_set_state() {
        let empty: Optional<NoDefault> = Optional::none();
        assert!(empty.is_none());

        let full = Optional::some(NoDefault("payload"));
        assert!(full.is_some());
        assert_eq!(full.peek().map(|v| v.0), Some("payload"));
    }

    #[test]
    fn const_none_is_empty() {
        const EMPTY: Optional<u32> = Optional::NONE;
        assert!(EMPTY.is_none());
        assert!(Optional::<String>::default().is_none());
    }

    #[test]
    fn layout_matches_core_option() {
        use core::mem::size_of;
        assert_eq!(size_of::<Optional<u64>>(), size_of::<Option<u64>>());
        assert_eq!(size_of::<Optional<Box<u8>>>(), size_of::<usize>());
    }
}
