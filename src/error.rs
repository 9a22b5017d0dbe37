//! The single failure mode of the crate: reading a value out of an empty cell.

use std::borrow::Cow;

/// Returned by [`Optional::unwrap`](crate::Optional::unwrap) and
/// [`Optional::expect`](crate::Optional::expect) when the container is empty.
///
/// The error carries a human-readable message. `unwrap` uses
/// [`DEFAULT_MESSAGE`](Self::DEFAULT_MESSAGE); `expect` uses the caller's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmptyValueAccess {
    message: Cow<'static, str>,
}

impl EmptyValueAccess {
    /// Message used when the caller did not supply one.
    pub const DEFAULT_MESSAGE: &'static str = "Option is None value";

    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message this error was created with.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for EmptyValueAccess {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl core::fmt::Display for EmptyValueAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EmptyValueAccess {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_standard_message() {
        let err = EmptyValueAccess::default();
        assert_eq!(err.message(), "Option is None value");
        assert_eq!(err.to_string(), EmptyValueAccess::DEFAULT_MESSAGE);
    }

    #[test]
    fn owned_and_static_messages_compare_by_text() {
        let owned = EmptyValueAccess::new(String::from("missing port"));
        let borrowed = EmptyValueAccess::new("missing port");
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(EmptyValueAccess::new("gone"));
        assert_eq!(boxed.to_string(), "gone");
    }
}
