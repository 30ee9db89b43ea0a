//! Algebraic polynomial notation: `"x^16 + x^12 + x^5 + 1"`.
//!
//! [`Polynomial::parse`] is a `const fn`, so a profile can be written the way
//! standards documents print it:
//!
//! ```
//! use crckit::{Crc, CrcParams, Table256Msb, poly::Polynomial};
//!
//! const CCITT: Polynomial = Polynomial::parse_or_panic("x^16 + x^12 + x^5 + 1");
//! const XMODEM: Crc<Table256Msb<u16>> = Crc::<Table256Msb<u16>>::new(CrcParams::<u16>::from_polynomial(CCITT));
//!
//! assert_eq!(CCITT.value, 0x1021);
//! assert_eq!(CCITT.degree, 16);
//! assert_eq!(XMODEM.calculate(b"123456789"), 0x31C3);
//! ```
//!
//! # Grammar
//!
//! Terms are joined by `+` in any order. A term is `x^<digits>`, `x` (degree
//! one) or `1` (degree zero, same as `x^0`). Whitespace may appear between any
//! two tokens but not inside a run of digits.

// SAFETY: All indexing is guarded by `i < bytes.len()` checks.
#![allow(clippy::indexing_slicing)]

use core::{fmt, str::FromStr};

use crate::error::PolyParseError;

/// A generator polynomial in CRC notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
  /// Coefficients below the leading term; bit `k` is the coefficient of `x^k`.
  pub value: u64,
  /// Exponent of the leading term, which is the CRC width.
  pub degree: u8,
}

const fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
  while i < bytes.len() && bytes[i].is_ascii_whitespace() {
    i += 1;
  }
  i
}

impl Polynomial {
  /// Parse an algebraic expression.
  pub const fn parse(text: &str) -> Result<Self, PolyParseError> {
    let bytes = text.as_bytes();
    // Bit k set once x^k has been seen (k <= 64).
    let mut seen: u128 = 0;
    let mut i = skip_whitespace(bytes, 0);
    if i == bytes.len() {
      return Err(PolyParseError::Empty);
    }

    loop {
      i = skip_whitespace(bytes, i);
      if i == bytes.len() {
        // Dangling `+`.
        return Err(PolyParseError::MalformedTerm { index: i });
      }
      let start = i;

      let degree: u32 = match bytes[i] {
        b'1' => {
          i += 1;
          0
        }
        b'x' => {
          i = skip_whitespace(bytes, i + 1);
          if i < bytes.len() && bytes[i] == b'^' {
            i = skip_whitespace(bytes, i + 1);
            if i == bytes.len() || !bytes[i].is_ascii_digit() {
              return Err(PolyParseError::MalformedTerm { index: start });
            }
            let mut exponent: u32 = 0;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
              exponent = exponent.saturating_mul(10).saturating_add((bytes[i] - b'0') as u32);
              i += 1;
            }
            exponent
          } else {
            1
          }
        }
        _ => return Err(PolyParseError::MalformedTerm { index: start }),
      };

      if degree > 64 {
        return Err(PolyParseError::DegreeTooLarge { degree });
      }
      let bit = 1u128 << degree;
      if seen & bit != 0 {
        return Err(PolyParseError::DuplicateTerm { degree: degree as u8 });
      }
      seen |= bit;

      i = skip_whitespace(bytes, i);
      if i == bytes.len() {
        break;
      }
      if bytes[i] != b'+' {
        return Err(PolyParseError::MalformedTerm { index: i });
      }
      i += 1;
    }

    let degree = 127 - seen.leading_zeros();
    if degree == 0 {
      return Err(PolyParseError::ZeroDegree);
    }
    Ok(Self { value: (seen & !(1u128 << degree)) as u64, degree: degree as u8 })
  }

  /// [`parse`](Self::parse) for `const` items.
  ///
  /// # Panics
  ///
  /// On malformed input, which in a `const` item is a compile error.
  #[must_use]
  pub const fn parse_or_panic(text: &str) -> Self {
    match Self::parse(text) {
      Ok(poly) => poly,
      Err(_) => panic!("malformed polynomial expression"),
    }
  }

  /// The CRC width this polynomial defines.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.degree
  }
}

impl FromStr for Polynomial {
  type Err = PolyParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

/// Renders highest degree first: `x^16 + x^12 + x^5 + 1`.
impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fn term(f: &mut fmt::Formatter<'_>, degree: u32) -> fmt::Result {
      match degree {
        0 => f.write_str("1"),
        1 => f.write_str("x"),
        _ => write!(f, "x^{degree}"),
      }
    }

    term(f, u32::from(self.degree))?;
    for degree in (0..u32::from(self.degree).min(64)).rev() {
      if (self.value >> degree) & 1 != 0 {
        f.write_str(" + ")?;
        term(f, degree)?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use proptest::prelude::*;

  use super::*;
  use crate::{BitShiftMsb, Crc, CrcParams};

  fn poly(value: u64, degree: u8) -> Result<Polynomial, PolyParseError> {
    Ok(Polynomial { value, degree })
  }

  #[test]
  fn parses_standard_forms() {
    assert_eq!(Polynomial::parse("x^2"), poly(0, 2));
    assert_eq!(Polynomial::parse("x^2+x^1"), poly(0b10, 2));
    assert_eq!(Polynomial::parse("x^16+x^1+1"), poly(0b11, 16));
    assert_eq!(Polynomial::parse("x^16+x^12+x^5+1"), poly(0x1021, 16));
    assert_eq!(Polynomial::parse("x^16+x^12+x^5+x^0"), poly(0x1021, 16));
    assert_eq!(Polynomial::parse("x^7 + x^3 + 1"), poly(0x09, 7));
    assert_eq!(Polynomial::parse("x^3+x+1"), poly(0b011, 3));
  }

  #[test]
  fn whitespace_between_tokens() {
    assert_eq!(Polynomial::parse(" x ^ 16 + x ^12+ x^ 5 +1 "), poly(0x1021, 16));
    assert_eq!(Polynomial::parse("x^16\t+\nx^12 + x^5 + 1"), poly(0x1021, 16));
  }

  #[test]
  fn term_order_is_free() {
    assert_eq!(Polynomial::parse("1 + x^5 + x^16 + x^12"), poly(0x1021, 16));
  }

  #[test]
  fn wide_polynomials() {
    let crc32 = "x^32 + x^26 + x^23 + x^22 + x^16 + x^12 + x^11 + x^10 + x^8 + x^7 + x^5 + x^4 + x^2 + x + 1";
    assert_eq!(Polynomial::parse(crc32), poly(0x04C1_1DB7, 32));
    assert_eq!(Polynomial::parse("x^64 + x^4 + x^3 + x + 1"), poly(0x1B, 64));
  }

  #[test]
  fn rejects_malformed_input() {
    assert_eq!(Polynomial::parse(""), Err(PolyParseError::Empty));
    assert_eq!(Polynomial::parse("   "), Err(PolyParseError::Empty));
    assert_eq!(Polynomial::parse("x^1 2 3"), Err(PolyParseError::MalformedTerm { index: 4 }));
    assert_eq!(Polynomial::parse("^1"), Err(PolyParseError::MalformedTerm { index: 0 }));
    assert_eq!(Polynomial::parse("x^   "), Err(PolyParseError::MalformedTerm { index: 0 }));
    assert_eq!(Polynomial::parse("x^8 +"), Err(PolyParseError::MalformedTerm { index: 5 }));
    assert_eq!(Polynomial::parse("x^8 ++ 1"), Err(PolyParseError::MalformedTerm { index: 5 }));
    assert_eq!(Polynomial::parse("x^8 + 2"), Err(PolyParseError::MalformedTerm { index: 6 }));
    assert_eq!(Polynomial::parse("y^8"), Err(PolyParseError::MalformedTerm { index: 0 }));
  }

  #[test]
  fn rejects_degenerate_polynomials() {
    assert_eq!(Polynomial::parse("x^65 + 1"), Err(PolyParseError::DegreeTooLarge { degree: 65 }));
    assert_eq!(
      Polynomial::parse("x^99999999999999"),
      Err(PolyParseError::DegreeTooLarge { degree: u32::MAX })
    );
    assert_eq!(Polynomial::parse("x^5 + x^5"), Err(PolyParseError::DuplicateTerm { degree: 5 }));
    assert_eq!(Polynomial::parse("1 + x^0"), Err(PolyParseError::DuplicateTerm { degree: 0 }));
    assert_eq!(Polynomial::parse("1"), Err(PolyParseError::ZeroDegree));
  }

  #[test]
  fn from_str_and_display() {
    let p: Polynomial = "x^16+x^12+x^5+1".parse().unwrap();
    assert_eq!(p.to_string(), "x^16 + x^12 + x^5 + 1");
    assert_eq!(Polynomial { value: 0b011, degree: 3 }.to_string(), "x^3 + x + 1");
    assert_eq!(Polynomial { value: 0, degree: 1 }.to_string(), "x");
    assert_eq!(p.width(), 16);
  }

  #[test]
  fn const_parse_drives_a_profile() {
    const CCITT: Polynomial = Polynomial::parse_or_panic("x^16+x^12+x^5+1");
    const CRC: Crc<BitShiftMsb<u16>> = Crc::<BitShiftMsb<u16>>::new(CrcParams::<u16>::from_polynomial(CCITT));
    let data: [u8; 21] = [
      0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0xAA, 0xBB, 0xCC,
      0xDD, 0xEE, 0xFF,
    ];
    assert_eq!(CRC.calculate(&data), 0x4B55);
  }

  #[test]
  #[should_panic(expected = "malformed polynomial expression")]
  fn parse_or_panic_panics() {
    let _ = Polynomial::parse_or_panic("x^");
  }

  proptest! {
    #[test]
    fn display_parse_round_trip(degree in 1u8..=64, value in any::<u64>()) {
      let p = Polynomial { value: value & crate::bits::mask(degree), degree };
      let reparsed = Polynomial::parse(&p.to_string());
      prop_assert_eq!(reparsed, Ok(p));
    }
  }
}
