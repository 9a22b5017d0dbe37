use core::fmt;
use core::hash::{Hash, Hasher};

use super::Optional;

impl<T: PartialEq> PartialEq for Optional<T> {
    /// Equal when both are empty, or both hold equal values. Neither side is consumed.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<T: Clone> Clone for Optional<T> {
    /// Duplicates the value. Unlike [`Optional::transfer`], the source keeps its value.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.slot.clone_from(&source.slot);
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(cell: Optional<T>) -> Self {
        cell.into_option()
    }
}

#[cfg(test)]
mod tests {
    use crate::Optional;

    #[test]
    fn equality_table() {
        assert_eq!(Optional::some(1), Optional::some(1));
        assert_ne!(Optional::some(1), Optional::some(2));
        assert_eq!(Optional::<i32>::none(), Optional::none());
        assert_ne!(Optional::some(1), Optional::none());
    }

    #[test]
    fn clone_does_not_drain() {
        let a = Optional::some(String::from("dup"));
        let b = a.clone();
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn clone_from_overwrites_state() {
        let src = Optional::some(7);
        let mut dst = Optional::none();
        dst.clone_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn debug_rendering() {
        assert_eq!(format!("{:?}", Optional::some(3)), "Some(3)");
        assert_eq!(format!("{:?}", Optional::<u8>::none()), "None");
    }

    #[test]
    fn converts_to_and_from_core_option() {
        let cell: Optional<u8> = Some(4).into();
        let back: Option<u8> = cell.into();
        assert_eq!(back, Some(4));
        assert_eq!(Optional::<u8>::from(None).into_option(), None);
    }
}
