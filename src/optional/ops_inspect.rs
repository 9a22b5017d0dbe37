use super::Optional;

impl<T> Optional<T> {
    /// Returns `true` if the cell holds a value.
    #[inline(always)]
    pub const fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `true` if the cell is empty.
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrows the value without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Mutably borrows the value without consuming it.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Calls `f` with a reference to the value if the cell is populated.
    ///
    /// The value stays in the cell. Returns `self` so callbacks can be chained:
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let cell = Optional::some(3);
    /// cell.if_some(|v| seen.push(*v)).if_none(|| seen.push(0));
    /// assert_eq!(seen, [3]);
    /// assert!(cell.is_some());
    /// ```
    #[inline]
    pub fn if_some<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.slot {
            f(value);
        }
        self
    }

    /// Calls `f` with a mutable reference to the value if the cell is populated.
    ///
    /// The value is transformed in place; the cell never changes between
    /// populated and empty.
    #[inline]
    pub fn if_some_mut<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut T),
    {
        if let Some(value) = &mut self.slot {
            f(value);
        }
        self
    }

    /// Calls `f` if the cell is empty. Returns `self` for chaining.
    #[inline]
    pub fn if_none<F>(&self, f: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.slot.is_none() {
            f();
        }
        self
    }
}
