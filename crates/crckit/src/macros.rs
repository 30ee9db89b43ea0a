//! Internal macros.
//!
//! Logging goes through these wrappers so that every call site compiles to
//! nothing unless the `tracing` feature is enabled. Only cold paths log:
//! configuration, table cache traffic and runtime profile construction.

/// Emit a `tracing::debug!` event when the `tracing` feature is on.
macro_rules! log_debug {
  ($($arg:tt)+) => {{
    #[cfg(feature = "tracing")]
    ::tracing::debug!($($arg)+);
  }};
}

/// Emit a `tracing::trace!` event when the `tracing` feature is on.
macro_rules! log_trace {
  ($($arg:tt)+) => {{
    #[cfg(feature = "tracing")]
    ::tracing::trace!($($arg)+);
  }};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is on.
macro_rules! log_warn {
  ($($arg:tt)+) => {{
    #[cfg(feature = "tracing")]
    ::tracing::warn!($($arg)+);
  }};
}
