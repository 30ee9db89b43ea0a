//! Streaming computation over a borrowed profile.

use core::fmt;

use traits::Checksum;

use crate::crc::Profile;

/// Running register for one message, fed in any number of spans.
///
/// `Digest` threads the register through [`Profile::calculate_partial`] so the
/// caller does not have to. [`finalize`](Self::finalize) does not consume or
/// modify the state and may be called at any point.
///
/// ```
/// use crckit::{Crc, Table256Lsb, catalog::CRC_32_ISO_HDLC};
///
/// const CRC32: Crc<Table256Lsb<u32>> = Crc::<Table256Lsb<u32>>::new(CRC_32_ISO_HDLC);
///
/// let mut digest = CRC32.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
/// ```
pub struct Digest<'a, P: Profile> {
  profile: &'a P,
  register: P::Register,
}

impl<'a, P: Profile> Digest<'a, P> {
  /// Start from the profile's initial value.
  #[inline]
  #[must_use]
  pub fn new(profile: &'a P) -> Self {
    Self { profile, register: profile.initial_value(true) }
  }

  /// Resume from a raw register, as returned by [`register`](Self::register).
  #[inline]
  #[must_use]
  pub fn resume(profile: &'a P, register: P::Register) -> Self {
    Self { profile, register }
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.register = self.profile.calculate_partial(self.register, data);
  }

  /// Same as calling [`update`](Self::update) on each buffer in order.
  #[inline]
  pub fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Checksum of everything fed so far.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> P::Register {
    self.profile.finalize(self.register)
  }

  /// Forget all input.
  #[inline]
  pub fn reset(&mut self) {
    self.register = self.profile.initial_value(true);
  }

  /// The raw, unfinalized register.
  #[inline]
  #[must_use]
  pub fn register(&self) -> P::Register {
    self.register
  }

  #[inline]
  #[must_use]
  pub fn profile(&self) -> &'a P {
    self.profile
  }
}

impl<P: Profile> Clone for Digest<'_, P> {
  fn clone(&self) -> Self {
    Self { profile: self.profile, register: self.register }
  }
}

impl<P: Profile> fmt::Debug for Digest<'_, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Digest")
      .field("algorithm", &self.profile.algorithm())
      .field("width", &self.profile.params().width)
      .field("register", &format_args!("{:#x}", self.register))
      .finish()
  }
}

impl<P: Profile> Checksum for Digest<'_, P> {
  type Output = P::Register;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Digest::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> P::Register {
    Digest::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Digest::reset(self);
  }
}
