//! Property tests: cross-strategy agreement for random parameters, streaming
//! equivalence, and differential validation against the `crc` crate.

// Proptest uses getcwd() which fails under Miri isolation.
#![cfg(not(miri))]

use crckit::{
  Algorithm, BitShiftLsb, BitShiftMsb, Crc, CrcParams, DynCrc, Table256Lsb, Table256Msb, bits, catalog,
  kernel_test::verify_strategies,
};
use proptest::prelude::*;

fn params_u16(width: u8, poly: u16, init: u16, reflect_in: bool, reflect_out: bool, xor_out: u16) -> CrcParams<u16> {
  let mask = bits::mask(width) as u16;
  CrcParams::<u16>::new(width, (poly & mask) | 1, init & mask, reflect_in, reflect_out, xor_out & mask)
}

fn params_u64(width: u8, poly: u64, init: u64, reflect_in: bool, reflect_out: bool, xor_out: u64) -> CrcParams<u64> {
  let mask = bits::mask(width);
  CrcParams::<u64>::new(width, (poly & mask) | 1, init & mask, reflect_in, reflect_out, xor_out & mask)
}

/// The same parameters as a `crc` crate algorithm. Leaked: proptest runs a
/// bounded number of cases and `crc::Crc` needs a `'static` reference.
fn reference_u16(params: &CrcParams<u16>) -> crc::Crc<u16> {
  let algorithm: &'static crc::Algorithm<u16> = Box::leak(Box::new(crc::Algorithm {
    width: params.width,
    poly: params.poly,
    init: params.init,
    refin: params.reflect_in,
    refout: params.reflect_out,
    xorout: params.xor_out,
    check: params.check,
    residue: 0,
  }));
  crc::Crc::<u16>::new(algorithm)
}

fn reference_u64(params: &CrcParams<u64>) -> crc::Crc<u64> {
  let algorithm: &'static crc::Algorithm<u64> = Box::leak(Box::new(crc::Algorithm {
    width: params.width,
    poly: params.poly,
    init: params.init,
    refin: params.reflect_in,
    refout: params.reflect_out,
    xorout: params.xor_out,
    check: params.check,
    residue: 0,
  }));
  crc::Crc::<u64>::new(algorithm)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn strategies_agree_for_random_u16_params(
    width in 1u8..=16,
    poly in any::<u16>(),
    init in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let params = params_u16(width, poly, init, reflect_in, reflect_out, xor_out);
    prop_assert!(verify_strategies(params, &data).is_ok(), "{}", params);
  }

  #[test]
  fn strategies_agree_for_random_u64_params(
    width in 1u8..=64,
    poly in any::<u64>(),
    init in any::<u64>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let params = params_u64(width, poly, init, reflect_in, reflect_out, xor_out);
    prop_assert!(verify_strategies(params, &data).is_ok(), "{}", params);
  }

  #[test]
  fn matches_crc_crate_u16(
    width in 9u8..=16,
    poly in any::<u16>(),
    init in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let params = params_u16(width, poly, init, reflect_in, reflect_out, xor_out);
    let reference = reference_u16(&params).checksum(&data);
    for algorithm in Algorithm::ALL {
      let ours = DynCrc::new(params, algorithm).unwrap();
      prop_assert_eq!(ours.calculate(&data), reference, "{} via {}", params, algorithm);
    }
  }

  #[test]
  fn matches_crc_crate_u64(
    width in 33u8..=64,
    poly in any::<u64>(),
    init in any::<u64>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let params = params_u64(width, poly, init, reflect_in, reflect_out, xor_out);
    let reference = reference_u64(&params).checksum(&data);
    for algorithm in Algorithm::ALL {
      let ours = DynCrc::new(params, algorithm).unwrap();
      prop_assert_eq!(ours.calculate(&data), reference, "{} via {}", params, algorithm);
    }
  }

  #[test]
  fn crc32_iso_hdlc_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    const OURS: Crc<Table256Lsb<u32>> = Crc::<Table256Lsb<u32>>::new(catalog::CRC_32_ISO_HDLC);
    let reference: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
    prop_assert_eq!(OURS.calculate(&data), reference.checksum(&data));
  }

  #[test]
  fn crc21_can_fd_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    const OURS: Crc<Table256Msb<u32>> = Crc::<Table256Msb<u32>>::new(catalog::CRC_21_CAN_FD);
    let reference: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_21_CAN_FD);
    prop_assert_eq!(OURS.calculate(&data), reference.checksum(&data));
  }

  #[test]
  fn crc5_usb_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    const OURS: Crc<BitShiftMsb<u8>> = Crc::<BitShiftMsb<u8>>::new(catalog::CRC_5_USB);
    let reference: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_5_USB);
    prop_assert_eq!(OURS.calculate(&data), reference.checksum(&data));
  }

  #[test]
  fn streaming_matches_oneshot(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    const CRC: Crc<BitShiftLsb<u16>> = Crc::<BitShiftLsb<u16>>::new(catalog::CRC_16_KERMIT);
    let mut digest = CRC.digest();
    for part in data.chunks(chunk) {
      digest.update(part);
    }
    prop_assert_eq!(digest.finalize(), CRC.calculate(&data));
  }

  #[test]
  fn streaming_matches_crc_crate_digest(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let ours = DynCrc::new(catalog::CRC_64_XZ, Algorithm::Table256Msb).unwrap();
    let reference: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_XZ);
    let mut a = ours.digest();
    let mut b = reference.digest();
    for part in data.chunks(chunk) {
      a.update(part);
      b.update(part);
    }
    prop_assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn partial_split_matches_oneshot(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<prop::sample::Index>()) {
    const CRC: Crc<Table256Msb<u32>> = Crc::<Table256Msb<u32>>::new(catalog::CRC_17_CAN_FD);
    let at = split.index(data.len() + 1);
    let (a, b) = data.split_at(at);
    let register = CRC.calculate_partial(CRC.initial_value(true), a);
    let register = CRC.calculate_partial(register, b);
    prop_assert_eq!(CRC.finalize(register), CRC.calculate(&data));
  }
}
