//! Streaming checksum trait.
//!
//! - **Stateless engines**: the running register lives in the implementor, never in the profile
//! - **Streaming**: incremental updates over successive memory spans
//! - **Verification**: compare against an expected value without leaking details

use core::fmt::Debug;

use crate::VerificationError;

/// Incremental checksum state.
///
/// Feeding a message through any sequence of [`update`](Self::update) calls
/// must yield the same [`finalize`](Self::finalize) value as feeding it in one
/// call.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{Crc, Table256Msb, catalog::CRC_16_XMODEM};
/// use traits::Checksum;
///
/// const XMODEM: Crc<Table256Msb<u16>> = Crc::<Table256Msb<u16>>::new(CRC_16_XMODEM);
///
/// let mut digest = XMODEM.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0x31C3);
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the state to the one it was created with
pub trait Checksum: Clone {
  /// The checksum output type (`u8`, `u16`, `u32` or `u64` for CRCs).
  type Output: Copy + Eq + Debug;

  /// Update the state with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the state with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the state with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the state, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the state to its initial value.
  fn reset(&mut self);

  /// Compare the finalized checksum against `expected`.
  #[inline]
  fn verify(&self, expected: Self::Output) -> Result<(), VerificationError> {
    if self.finalize() == expected { Ok(()) } else { Err(VerificationError::new()) }
  }
}
