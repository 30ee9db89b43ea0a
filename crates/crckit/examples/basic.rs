//! Basic usage: `const` profiles, streaming, runtime profiles and parsed
//! polynomials.
//!
//! Run with: `cargo run --example basic -p crckit`

use crckit::{
  Algorithm, BitShiftMsb, Crc, CrcParams, DynCrc, Polynomial, Table256Lsb, Table256Msb, catalog,
  kernel_test::run_all_strategies,
};

const CRC32: Crc<Table256Lsb<u32>> = Crc::<Table256Lsb<u32>>::new(catalog::CRC_32_ISO_HDLC);
const CRC5_USB: Crc<BitShiftMsb<u8>> = Crc::<BitShiftMsb<u8>>::new(catalog::CRC_5_USB);
const CRC21_CAN_FD: Crc<Table256Msb<u32>> = Crc::<Table256Msb<u32>>::new(catalog::CRC_21_CAN_FD);

fn main() {
  println!("=== crckit Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  runtime_example();
  polynomial_example();
}

/// One-shot computation with the strategy fixed at compile time.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc32 = CRC32.calculate(data);
  println!("CRC-32/ISO-HDLC: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // USB token packets: 5-bit CRC, bit-at-a-time, no table in the binary.
  let crc5 = CRC5_USB.calculate(data);
  println!("CRC-5/USB:       0x{crc5:02X}");
  assert_eq!(crc5, 0x19);

  let crc21 = CRC21_CAN_FD.calculate(data);
  println!("CRC-21/CAN-FD:   0x{crc21:06X}");
  assert_eq!(crc21, 0x0E_D841);

  println!();
}

/// Streaming computation: partial updates, then finalize.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut digest = CRC32.digest();
  digest.update(b"1234");
  digest.update(b"56789");
  let crc = digest.finalize();
  println!("Streaming CRC-32: 0x{crc:08X}");
  assert_eq!(crc, CRC32.calculate(b"123456789"));

  // The same thing by hand through the profile operations.
  let register = CRC32.calculate_partial(CRC32.initial_value(true), b"1234");
  let register = CRC32.calculate_partial(register, b"56789");
  assert_eq!(CRC32.finalize(register), crc);

  println!();
}

/// Parameters known only at run time.
fn runtime_example() {
  println!("--- Runtime Profiles ---\n");

  let params = CrcParams::<u16> {
    width: 16,
    poly: 0x8005,
    init: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    check: 0x4B37,
  };

  match DynCrc::auto(params) {
    Ok(crc) => println!("{} via {}: 0x{:04X}", params, crc.algorithm(), crc.calculate(b"123456789")),
    Err(e) => println!("rejected: {e}"),
  }

  let bad = CrcParams { width: 17, ..params };
  if let Err(e) = DynCrc::new(bad, Algorithm::BitShiftLsb) {
    println!("width 17 in a u16: {e}");
  }

  if let Ok(results) = run_all_strategies(params, b"123456789") {
    for result in results {
      println!("  {:<14} 0x{:04X}", result.name, result.checksum);
    }
  }

  println!();
}

/// Polynomials written the way datasheets print them.
fn polynomial_example() {
  println!("--- Polynomial Expressions ---\n");

  const CCITT: Polynomial = Polynomial::parse_or_panic("x^16 + x^12 + x^5 + 1");
  let crc = Crc::<BitShiftMsb<u16>>::new(CrcParams::<u16>::from_polynomial(CCITT));
  println!("{CCITT} => 0x{:04X}", crc.calculate(b"123456789"));
  assert_eq!(crc.calculate(b"123456789"), 0x31C3);

  match "x^8 + x^2 + x + 1 + x^2".parse::<Polynomial>() {
    Ok(poly) => println!("parsed {poly}"),
    Err(e) => println!("rejected: {e}"),
  }
}
