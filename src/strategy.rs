//! `proptest` integration (feature `proptest`).
//!
//! Generates populated and empty cells with the same distribution as
//! `proptest::option::of`.

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::option::{self, OptionStrategy};
use proptest::strategy::{Map, Strategy};

use crate::Optional;

/// Strategy type produced by [`optional`].
pub type OptionalStrategy<S> =
    Map<OptionStrategy<S>, fn(Option<<S as Strategy>::Value>) -> Optional<<S as Strategy>::Value>>;

/// Lifts a value strategy into one that yields `Optional` cells.
pub fn optional<S: Strategy>(inner: S) -> OptionalStrategy<S> {
    option::of(inner).prop_map(Optional::from as fn(Option<S::Value>) -> Optional<S::Value>)
}

impl<T: Arbitrary> Arbitrary for Optional<T> {
    type Parameters = T::Parameters;
    type Strategy = OptionalStrategy<T::Strategy>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        optional(any_with::<T>(args))
    }
}
