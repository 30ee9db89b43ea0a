//! Error types shared across crckit.
//!
//! Individual crates may define additional errors as needed.

use core::fmt;

/// Checksum verification failed.
///
/// Returned when a computed checksum does not match the expected value
/// (a frame trailer, a stored sector CRC, an SD card response CRC).
/// Carries no detail: the caller already holds both values.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u16, expected: u16) -> Result<(), VerificationError> {
///   if computed == expected { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(verify(0x31C3, 0x31C3).is_ok());
/// assert!(verify(0x31C3, 0x0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum mismatch")
  }
}

impl core::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(VerificationError::new().to_string(), "checksum mismatch");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", VerificationError::new());
    assert_eq!(dbg, "VerificationError");
  }

  #[test]
  fn default_impl() {
    let err: VerificationError = Default::default();
    assert_eq!(err, VerificationError::new());
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = VerificationError::new();
    assert!(err.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<VerificationError>();
    assert_sync::<VerificationError>();
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<VerificationError>(), 0);
  }
}
