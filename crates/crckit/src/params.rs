//! CRC algorithm parameters.
//!
//! This module defines the parameter set for a CRC algorithm following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! (the Rocksoft model).

use core::fmt;

use crate::{bits, error::ParamsError, kernels, poly::Polynomial, register::Register};

/// The Rocksoft-model check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (1..=`W::BITS`)
/// - `poly`: The generator polynomial without its implicit top bit, natural order
/// - `init`: Initial register value, natural order
/// - `reflect_in`: Process each input byte least significant bit first
/// - `reflect_out`: Reflect the final register before XOR
/// - `xor_out`: Value XORed into the final register
/// - `check`: Checksum of ASCII `"123456789"`
///
/// # Reflection
///
/// "Reflected" means bit-reversed over `width` bits. Most CRCs in wide use
/// (CRC-32, CRC-32C, CRC-64/XZ) reflect both input and output, which maps
/// naturally onto the LSB-first strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams<W> {
  /// Register width in bits.
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub poly: W,
  /// Initial value for the CRC register.
  pub init: W,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: W,
  /// Checksum of [`CHECK_INPUT`].
  pub check: W,
}

macro_rules! impl_params {
  ($($ty:ty => $module:ident;)+) => {
    $(
      impl CrcParams<$ty> {
        /// Build a parameter set and compute its check value.
        ///
        /// # Panics
        ///
        /// If the parameters are invalid (see [`assert_valid`](Self::assert_valid)).
        #[must_use]
        pub const fn new(width: u8, poly: $ty, init: $ty, reflect_in: bool, reflect_out: bool, xor_out: $ty) -> Self {
          let mut params = Self { width, poly, init, reflect_in, reflect_out, xor_out, check: 0 };
          params.assert_valid();
          params.check = params.reference_check();
          params
        }

        /// Parameters for a parsed polynomial: zero init and xor-out, no reflection.
        ///
        /// # Panics
        ///
        /// If the polynomial's degree exceeds the backing register.
        #[must_use]
        pub const fn from_polynomial(poly: Polynomial) -> Self {
          assert!(poly.degree as u32 <= <$ty>::BITS, "CRC width exceeds the backing register");
          Self::new(poly.degree, poly.value as $ty, 0, false, false, 0)
        }

        /// Panic unless the parameters describe a CRC this register can hold.
        ///
        /// In a `const` item this turns invalid parameters into a compile error.
        pub const fn assert_valid(&self) {
          assert!(self.width != 0, "CRC width must be at least 1");
          assert!(self.width as u32 <= <$ty>::BITS, "CRC width exceeds the backing register");
          let outside = !bits::mask(self.width);
          assert!(self.poly as u64 & outside == 0, "polynomial does not fit in the CRC width");
          assert!(self.init as u64 & outside == 0, "initial value does not fit in the CRC width");
          assert!(self.xor_out as u64 & outside == 0, "xor-out value does not fit in the CRC width");
        }

        /// Checksum of `"123456789"` computed bit by bit, independent of `check`.
        #[must_use]
        pub const fn reference_check(&self) -> $ty {
          let poly = kernels::$module::align_poly(self.poly, self.width);
          let register = kernels::$module::bitshift_msb(self.init, CHECK_INPUT, poly, self.width, self.reflect_in);
          let register = if self.reflect_out { bits::reflect(register as u64, self.width) as $ty } else { register };
          ((register ^ self.xor_out) as u64 & bits::mask(self.width)) as $ty
        }
      }
    )+
  };
}

impl_params! {
  u8 => w8;
  u16 => w16;
  u32 => w32;
  u64 => w64;
}

impl<W: Register> CrcParams<W> {
  /// Check the parameters without panicking, for values supplied at run time.
  pub fn validate(&self) -> Result<(), ParamsError> {
    if self.width == 0 {
      return Err(ParamsError::ZeroWidth);
    }
    if u32::from(self.width) > W::BITS {
      return Err(ParamsError::WidthTooLarge { width: self.width, bits: W::BITS });
    }
    let outside = !bits::mask(self.width);
    if self.poly.into_u64() & outside != 0 {
      return Err(ParamsError::PolynomialOutOfRange);
    }
    if self.init.into_u64() & outside != 0 {
      return Err(ParamsError::InitOutOfRange);
    }
    if self.xor_out.into_u64() & outside != 0 {
      return Err(ParamsError::XorOutOfRange);
    }
    Ok(())
  }

  /// Mask with the low `width` bits set, as a register value.
  #[inline]
  #[must_use]
  pub fn mask(&self) -> W {
    W::from_u64(bits::mask(self.width))
  }
}

/// RevEng catalogue notation: `width=16 poly=0x1021 init=0xffff refin=false ...`.
impl<W: Register> fmt::Display for CrcParams<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width).div_ceil(4) + 2;
    write!(
      f,
      "width={} poly={:#0digits$x} init={:#0digits$x} refin={} refout={} xorout={:#0digits$x} check={:#0digits$x}",
      self.width, self.poly, self.init, self.reflect_in, self.reflect_out, self.xor_out, self.check,
    )
  }
}
