//! Cross-strategy testing utilities.
//!
//! Runs every strategy over the same parameters and input and reports each
//! result next to a bit-serial oracle. Used by the integration tests and the
//! differential fuzz target.
//!
//! The oracle shares no code with the kernels or table generators: it feeds
//! one message bit at a time into a `u64` register in the textbook
//! Rocksoft order, so it is correct by inspection for every width up to 64.

use alloc::{format, string::String, vec::Vec};

use crate::{
  bits,
  dynamic::DynCrc,
  error::ParamsError,
  params::CrcParams,
  register::Register,
  strategy::Algorithm,
};

/// Result from running one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyResult<W> {
  /// Strategy name ("reference", "bitshift-msb", ...).
  pub name: &'static str,
  /// Finalized checksum.
  pub checksum: W,
}

fn reference<W: Register>(params: &CrcParams<W>, data: &[u8]) -> W {
  let width = params.width;
  let mask = bits::mask(width);
  let top = 1u64 << (width - 1);
  let poly = params.poly.into_u64();

  let mut register = params.init.into_u64() & mask;
  for &byte in data {
    let byte = if params.reflect_in { byte.reverse_bits() } else { byte };
    for i in (0..8).rev() {
      let bit = (byte >> i) & 1 == 1;
      let carry = register & top != 0;
      register = (register << 1) & mask;
      if bit != carry {
        register ^= poly;
      }
    }
  }

  if params.reflect_out {
    register = bits::reflect(register, width);
  }
  W::from_u64((register ^ params.xor_out.into_u64()) & mask)
}

/// Run the reference and all four strategies on `data`.
///
/// The first entry is always the reference. All checksums should be
/// identical.
pub fn run_all_strategies<W: Register>(
  params: CrcParams<W>,
  data: &[u8],
) -> Result<Vec<StrategyResult<W>>, ParamsError> {
  params.validate()?;

  let mut results = Vec::with_capacity(1 + Algorithm::ALL.len());
  results.push(StrategyResult { name: "reference", checksum: reference(&params, data) });

  for algorithm in Algorithm::ALL {
    let crc = DynCrc::new(params, algorithm)?;
    results.push(StrategyResult { name: algorithm.as_str(), checksum: crc.calculate(data) });
  }

  Ok(results)
}

/// Verify all strategies agree with the reference.
///
/// Returns `Ok(checksum)` if they do, or `Err` describing the first mismatch.
pub fn verify_strategies<W: Register>(params: CrcParams<W>, data: &[u8]) -> Result<W, String> {
  let results = run_all_strategies(params, data).map_err(|e| format!("invalid parameters: {e}"))?;

  let first = results.first().ok_or_else(|| String::from("no strategies available"))?;
  let expected = first.checksum;

  for result in results.iter().skip(1) {
    if result.checksum != expected {
      return Err(format!(
        "strategy mismatch for {params}: {} produced {:#x}, but {} produced {:#x}",
        first.name, expected, result.name, result.checksum
      ));
    }
  }

  Ok(expected)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{ALL_U8, ALL_U16, ALL_U32, ALL_U64, CRC_8_SMBUS, CRC_21_CAN_FD, CRC_64_XZ};

  #[test]
  fn reference_reproduces_catalogue_checks() {
    for (name, params) in ALL_U8 {
      assert_eq!(reference(params, b"123456789"), params.check, "{name}");
    }
    for (name, params) in ALL_U16 {
      assert_eq!(reference(params, b"123456789"), params.check, "{name}");
    }
    for (name, params) in ALL_U32 {
      assert_eq!(reference(params, b"123456789"), params.check, "{name}");
    }
    for (name, params) in ALL_U64 {
      assert_eq!(reference(params, b"123456789"), params.check, "{name}");
    }
  }

  #[test]
  fn reference_comes_first() {
    let results = run_all_strategies(CRC_8_SMBUS, b"123456789").unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].name, "reference");
    assert!(results.iter().all(|r| r.checksum == 0xF4));
  }

  #[test]
  fn strategies_agree_empty() {
    verify_strategies(CRC_64_XZ, &[]).expect("strategies should agree on empty input");
  }

  #[test]
  fn strategies_agree_medium() {
    let data: Vec<u8> = (0..1024).map(|i| (i as u8).wrapping_mul(17)).collect();
    verify_strategies(CRC_21_CAN_FD, &data).expect("strategies should agree on medium input");
  }

  #[test]
  fn odd_widths_agree() {
    let data: Vec<u8> = (0..333).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect();
    for width in 1..=16u8 {
      let poly = (0x8D95_u16 >> (16 - width)) | 1;
      let mask = bits::mask(width) as u16;
      for (reflect_in, reflect_out) in [(false, false), (true, true), (false, true), (true, false)] {
        let params = CrcParams::<u16>::new(width, poly & mask, 0x5A5A & mask, reflect_in, reflect_out, 0x0F0F & mask);
        verify_strategies(params, &data).unwrap();
      }
    }
  }

  #[test]
  fn invalid_params_are_rejected() {
    let bad16 = CrcParams::<u16> { width: 5, poly: 0x40, init: 0, reflect_in: false, reflect_out: false, xor_out: 0, check: 0 };
    assert_eq!(run_all_strategies(bad16, b"x").err(), Some(ParamsError::PolynomialOutOfRange));
    assert!(verify_strategies(bad16, b"x").unwrap_err().starts_with("invalid parameters"));
  }
}
