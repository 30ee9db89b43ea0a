//! Recoverable errors for runtime-supplied parameters and polynomial text.
//!
//! Parameters baked into `const` items never reach these: their constructors
//! panic during const evaluation instead.

use core::fmt;

/// A [`CrcParams`](crate::CrcParams) value that cannot describe a CRC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// `width` is zero.
  ZeroWidth,
  /// `width` exceeds the backing register.
  WidthTooLarge {
    /// Requested width.
    width: u8,
    /// Bits in the backing register.
    bits: u32,
  },
  /// `poly` has bits at or above `width`.
  PolynomialOutOfRange,
  /// `init` has bits at or above `width`.
  InitOutOfRange,
  /// `xor_out` has bits at or above `width`.
  XorOutOfRange,
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::ZeroWidth => f.write_str("CRC width must be at least 1"),
      Self::WidthTooLarge { width, bits } => write!(f, "CRC width {width} exceeds the {bits}-bit register"),
      Self::PolynomialOutOfRange => f.write_str("polynomial does not fit in the CRC width"),
      Self::InitOutOfRange => f.write_str("initial value does not fit in the CRC width"),
      Self::XorOutOfRange => f.write_str("xor-out value does not fit in the CRC width"),
    }
  }
}

impl core::error::Error for ParamsError {}

/// Why a polynomial expression such as `"x^16 + x^12 + x^5 + 1"` failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PolyParseError {
  /// The input holds no terms.
  Empty,
  /// Unexpected input at byte `index`; terms are `x^<digits>`, `x` or `1`.
  MalformedTerm {
    /// Byte offset into the input.
    index: usize,
  },
  /// An exponent above 64.
  DegreeTooLarge {
    /// The exponent as written, saturated at `u32::MAX`.
    degree: u32,
  },
  /// The same exponent appears twice.
  DuplicateTerm {
    /// The repeated exponent.
    degree: u8,
  },
  /// Only a constant term, so there is no register.
  ZeroDegree,
}

impl fmt::Display for PolyParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => f.write_str("empty polynomial"),
      Self::MalformedTerm { index } => write!(f, "malformed polynomial term at byte {index}"),
      Self::DegreeTooLarge { degree } => write!(f, "polynomial degree {degree} exceeds 64"),
      Self::DuplicateTerm { degree } => write!(f, "polynomial term x^{degree} appears more than once"),
      Self::ZeroDegree => f.write_str("polynomial has no term above x^0"),
    }
  }
}

impl core::error::Error for PolyParseError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn params_error_messages() {
    assert_eq!(ParamsError::ZeroWidth.to_string(), "CRC width must be at least 1");
    assert_eq!(
      ParamsError::WidthTooLarge { width: 17, bits: 16 }.to_string(),
      "CRC width 17 exceeds the 16-bit register"
    );
    assert_eq!(ParamsError::InitOutOfRange.to_string(), "initial value does not fit in the CRC width");
  }

  #[test]
  fn poly_error_messages() {
    assert_eq!(PolyParseError::Empty.to_string(), "empty polynomial");
    assert_eq!(PolyParseError::MalformedTerm { index: 4 }.to_string(), "malformed polynomial term at byte 4");
    assert_eq!(PolyParseError::DegreeTooLarge { degree: 65 }.to_string(), "polynomial degree 65 exceeds 64");
    assert_eq!(PolyParseError::DuplicateTerm { degree: 5 }.to_string(), "polynomial term x^5 appears more than once");
  }

  #[test]
  fn error_trait_impls() {
    use core::error::Error;

    assert!(ParamsError::XorOutOfRange.source().is_none());
    assert!(PolyParseError::ZeroDegree.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ParamsError>();
    assert_send_sync::<PolyParseError>();
  }
}
