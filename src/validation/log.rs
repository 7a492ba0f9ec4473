//! Tracing hooks. Without the `tracing` feature every hook compiles to nothing.

use super::error::Context;

#[cfg(feature = "tracing")]
pub(crate) fn failure_recorded(context: &Context, message: &str) {
    tracing::debug!(path = %context, reason = message, "validation failure recorded");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn failure_recorded(_context: &Context, _message: &str) {}

#[cfg(feature = "tracing")]
pub(crate) fn errors_collected(count: usize) {
    tracing::trace!(count, "validation failed, collecting errors");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn errors_collected(_count: usize) {}
