//! Diagnostics hooks.
//!
//! With the `tracing` feature these forward to the `tracing` crate; without it
//! they expand to nothing, so default builds perform no I/O of any kind.

#[cfg(feature = "tracing")]
macro_rules! trace_op {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_op {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_op {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_op {
    ($($arg:tt)*) => {};
}
