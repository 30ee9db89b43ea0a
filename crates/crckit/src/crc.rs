//! CRC profiles: parameters bound to a strategy.
//!
//! A profile is immutable and holds no running state. The register is passed
//! in and returned by every call, so one profile can serve any number of
//! threads working on independent messages.
//!
//! # Partial computation
//!
//! ```
//! use crckit::{Crc, Table256Lsb, catalog::CRC_16_ARC};
//!
//! const ARC: Crc<Table256Lsb<u16>> = Crc::<Table256Lsb<u16>>::new(CRC_16_ARC);
//!
//! let mut register = ARC.initial_value(true);
//! register = ARC.calculate_partial(register, b"1234");
//! register = ARC.calculate_partial(register, b"56789");
//! assert_eq!(ARC.finalize(register), 0xBB3D);
//! assert_eq!(ARC.calculate(b"123456789"), 0xBB3D);
//! ```

use traits::VerificationError;

use crate::{
  bits,
  digest::Digest,
  params::CrcParams,
  register::Register,
  strategy::{Algorithm, BitShiftLsb, BitShiftMsb, Strategy, Table256Lsb, Table256Msb},
};

/// The profile contract shared by [`Crc`] and `DynCrc`.
///
/// Implementors supply the parameters, the algorithm and the division step;
/// initial value, finalization and one-shot calculation follow from those.
pub trait Profile {
  /// Backing integer of the register and of the checksum.
  type Register: Register;

  /// The bound parameters.
  fn params(&self) -> &CrcParams<Self::Register>;

  /// The bound strategy.
  fn algorithm(&self) -> Algorithm;

  /// Advance `register` over `data` without finalizing.
  ///
  /// Threading the result into the next call yields the same register as one
  /// call over the concatenated input. `register` is masked to the low `width`
  /// bits on entry, so an empty `data` returns `register` unchanged only when
  /// it already fits the width.
  fn calculate_partial(&self, register: Self::Register, data: &[u8]) -> Self::Register;

  /// Starting register.
  ///
  /// LSB-first strategies keep the register reflected; with
  /// `reverse_if_required` the initial value is returned in that form, ready
  /// for [`calculate_partial`](Self::calculate_partial). Otherwise the
  /// configured value is returned as written.
  fn initial_value(&self, reverse_if_required: bool) -> Self::Register {
    let params = self.params();
    if reverse_if_required && !self.algorithm().is_msb_first() {
      Self::Register::from_u64(bits::reflect(params.init.into_u64(), params.width))
    } else {
      params.init
    }
  }

  /// Turn a raw register into the published checksum.
  ///
  /// The register is reflected over `width` bits when the output order and
  /// the strategy's internal order disagree, then XORed with `xor_out`.
  /// Apply this once per message: finalizing a finalized value is meaningless.
  fn finalize(&self, register: Self::Register) -> Self::Register {
    let params = self.params();
    let mut value = register.into_u64() & bits::mask(params.width);
    if params.reflect_out == self.algorithm().is_msb_first() {
      value = bits::reflect(value, params.width);
    }
    Self::Register::from_u64((value ^ params.xor_out.into_u64()) & bits::mask(params.width))
  }

  /// Checksum of one contiguous buffer.
  fn calculate(&self, data: &[u8]) -> Self::Register {
    self.finalize(self.calculate_partial(self.initial_value(true), data))
  }
}

/// A CRC profile with the strategy fixed at compile time.
///
/// Build one per width/strategy pair with `Crc::<S>::new`; in a `const` item
/// the lookup table (if any) is generated at compile time and invalid
/// parameters are a compile error.
///
/// ```
/// use crckit::{BitShiftMsb, Crc, CrcParams};
///
/// // SD card command CRC.
/// const CRC7: Crc<BitShiftMsb<u8>> = Crc::<BitShiftMsb<u8>>::new(CrcParams::<u8>::new(7, 0x09, 0, false, false, 0));
/// assert_eq!(CRC7.calculate(&[0x40, 0, 0, 0, 0]), 0x4A);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc<S: Strategy> {
  params: CrcParams<S::Register>,
  strategy: S,
}

macro_rules! impl_crc_ctors {
  (@one $strategy:ident, $ty:ty) => {
    impl Crc<$strategy<$ty>> {
      /// Bind `params` to this strategy.
      ///
      /// # Panics
      ///
      /// If `params` is invalid for this register.
      #[must_use]
      pub const fn new(params: CrcParams<$ty>) -> Self {
        params.assert_valid();
        Self { params, strategy: $strategy::<$ty>::new(params.poly, params.width, params.reflect_in) }
      }
    }
  };
  ($($ty:ty),+) => {
    $(
      impl_crc_ctors!(@one BitShiftMsb, $ty);
      impl_crc_ctors!(@one BitShiftLsb, $ty);
      impl_crc_ctors!(@one Table256Msb, $ty);
      impl_crc_ctors!(@one Table256Lsb, $ty);
    )+
  };
}

impl_crc_ctors!(u8, u16, u32, u64);

impl<S: Strategy> Crc<S> {
  /// Checksum of one contiguous buffer.
  #[inline]
  #[must_use]
  pub fn calculate(&self, data: &[u8]) -> S::Register {
    Profile::calculate(self, data)
  }

  /// Advance `register` over `data` without finalizing.
  ///
  /// See [`Profile::calculate_partial`]; bits above `width` are dropped.
  #[inline]
  #[must_use]
  pub fn calculate_partial(&self, register: S::Register, data: &[u8]) -> S::Register {
    self.strategy.advance(register, data)
  }

  /// Turn a raw register into the published checksum.
  #[inline]
  #[must_use]
  pub fn finalize(&self, register: S::Register) -> S::Register {
    Profile::finalize(self, register)
  }

  /// Starting register; see [`Profile::initial_value`].
  #[inline]
  #[must_use]
  pub fn initial_value(&self, reverse_if_required: bool) -> S::Register {
    Profile::initial_value(self, reverse_if_required)
  }

  /// Generator polynomial, natural order, without the implicit top bit.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> S::Register {
    self.params.poly
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn polynomial_length(&self) -> u8 {
    self.params.width
  }

  /// Configured initial value, natural order.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> S::Register {
    self.params.init
  }

  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> S::Register {
    self.params.xor_out
  }

  #[inline]
  #[must_use]
  pub const fn input_reflected(&self) -> bool {
    self.params.reflect_in
  }

  #[inline]
  #[must_use]
  pub const fn output_reflected(&self) -> bool {
    self.params.reflect_out
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams<S::Register> {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> &S {
    &self.strategy
  }

  /// Which of the four strategies this profile runs.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    S::ALGORITHM
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_, Self> {
    Digest::new(self)
  }

  /// Compare the checksum of `data` against `expected`.
  #[inline]
  pub fn verify(&self, data: &[u8], expected: S::Register) -> Result<(), VerificationError> {
    if self.calculate(data) == expected { Ok(()) } else { Err(VerificationError::new()) }
  }
}

impl<S: Strategy> Profile for Crc<S> {
  type Register = S::Register;

  #[inline]
  fn params(&self) -> &CrcParams<S::Register> {
    &self.params
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    S::ALGORITHM
  }

  #[inline]
  fn calculate_partial(&self, register: S::Register, data: &[u8]) -> S::Register {
    self.strategy.advance(register, data)
  }
}
