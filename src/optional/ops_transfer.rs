use super::Optional;

impl<T> Optional<T> {
    /// Moves this cell's state into a new cell, leaving `self` empty.
    ///
    /// This is the draining "construct from another container" operation:
    /// a populated source yields a populated result and becomes empty; an
    /// empty source yields an empty result. Use [`Clone`] for a
    /// non-draining duplicate.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let mut a = Optional::some(String::from("owned"));
    /// let b = a.transfer();
    /// assert!(b.is_some());
    /// assert!(a.is_none());
    /// ```
    #[inline]
    #[must_use = "the transferred value is dropped if the result is unused"]
    pub fn transfer(&mut self) -> Self {
        trace_op!(op = "transfer", populated = self.is_some());
        Self {
            slot: self.slot.take(),
        }
    }

    /// Replaces this cell's whole state with `source`'s, leaving `source` empty.
    ///
    /// Any value previously held by `self` is dropped first. If `source` is
    /// empty, `self` ends up empty.
    #[inline]
    pub fn assign_from(&mut self, source: &mut Self) {
        trace_op!(op = "assign_from", populated = source.is_some());
        self.slot = source.slot.take();
    }
}

impl<T> From<&mut Optional<T>> for Optional<T> {
    /// Draining construction; see [`Optional::transfer`].
    #[inline]
    fn from(source: &mut Optional<T>) -> Self {
        source.transfer()
    }
}
