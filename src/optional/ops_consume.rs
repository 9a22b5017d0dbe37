use std::borrow::Cow;

use super::Optional;
use crate::EmptyValueAccess;

impl<T> Optional<T> {
    /// Moves the value out, leaving the cell empty.
    ///
    /// # Errors
    /// Returns [`EmptyValueAccess`] with the message
    /// [`"Option is None value"`](EmptyValueAccess::DEFAULT_MESSAGE) if the cell
    /// is empty. The cell is left untouched in that case.
    #[inline]
    pub fn unwrap(&mut self) -> Result<T, EmptyValueAccess> {
        self.unwrap_as()
    }

    /// Like [`unwrap`](Self::unwrap), but reports emptiness as the caller's error type.
    ///
    /// ```
    /// use optional::{EmptyValueAccess, Optional};
    ///
    /// #[derive(Debug)]
    /// struct ConfigError(String);
    ///
    /// impl From<EmptyValueAccess> for ConfigError {
    ///     fn from(err: EmptyValueAccess) -> Self {
    ///         ConfigError(err.to_string())
    ///     }
    /// }
    ///
    /// let mut port: Optional<u16> = Optional::none();
    /// let err = port.unwrap_as::<ConfigError>().unwrap_err();
    /// assert_eq!(err.0, "Option is None value");
    /// ```
    ///
    /// # Errors
    /// Returns `E::from(EmptyValueAccess::default())` if the cell is empty.
    #[inline]
    pub fn unwrap_as<E>(&mut self) -> Result<T, E>
    where
        E: From<EmptyValueAccess>,
    {
        self.take_or_else(EmptyValueAccess::default)
    }

    /// Moves the value out, leaving the cell empty.
    ///
    /// # Errors
    /// Returns [`EmptyValueAccess`] carrying `message` if the cell is empty.
    /// The cell is left untouched in that case.
    #[inline]
    pub fn expect(&mut self, message: impl Into<Cow<'static, str>>) -> Result<T, EmptyValueAccess> {
        self.expect_as(message)
    }

    /// Like [`expect`](Self::expect), but reports emptiness as the caller's error type.
    ///
    /// # Errors
    /// Returns `E::from(EmptyValueAccess::new(message))` if the cell is empty.
    #[inline]
    pub fn expect_as<E>(&mut self, message: impl Into<Cow<'static, str>>) -> Result<T, E>
    where
        E: From<EmptyValueAccess>,
    {
        self.take_or_else(|| EmptyValueAccess::new(message))
    }

    /// Moves the value out, or returns `fallback()` if the cell is empty.
    ///
    /// The cell is empty afterwards either way. `fallback` runs only on the
    /// empty path.
    #[inline]
    pub fn unwrap_or<F>(&mut self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        trace_op!(op = "unwrap_or", populated = self.is_some());
        self.slot.take().unwrap_or_else(fallback)
    }

    /// Moves the value out, or returns `default` if the cell is empty.
    ///
    /// The cell is empty afterwards either way. On the populated path
    /// `default` is dropped.
    #[inline]
    pub fn unwrap_def(&mut self, default: T) -> T {
        trace_op!(op = "unwrap_def", populated = self.is_some());
        self.slot.take().unwrap_or(default)
    }

    /// Moves the value out, or returns a clone of `default` if the cell is empty.
    #[inline]
    pub fn unwrap_def_cloned(&mut self, default: &T) -> T
    where
        T: Clone,
    {
        self.unwrap_or(|| default.clone())
    }

    /// Dispatches on the cell's state, consuming the value if present.
    ///
    /// `some_fn` receives the moved-out value; `none_fn` runs when the cell
    /// is empty. Both branches leave the cell empty.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::some(3).match_with(|x| x + 1, || 0), 4);
    /// assert_eq!(Optional::<i32>::none().match_with(|x| x + 1, || 0), 0);
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(&mut self, some_fn: S, none_fn: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        trace_op!(op = "match_with", populated = self.is_some());
        match self.slot.take() {
            Some(value) => some_fn(value),
            None => none_fn(),
        }
    }

    /// Shared path for the fallible accessors. The emptiness check happens
    /// before the slot is touched.
    fn take_or_else<E, M>(&mut self, err: M) -> Result<T, E>
    where
        E: From<EmptyValueAccess>,
        M: FnOnce() -> EmptyValueAccess,
    {
        match self.slot.take() {
            Some(value) => {
                trace_op!(op = "unwrap", populated = true);
                Ok(value)
            }
            None => {
                let err = err();
                debug_op!(message = err.message(), "read from empty optional");
                Err(E::from(err))
            }
        }
    }
}
