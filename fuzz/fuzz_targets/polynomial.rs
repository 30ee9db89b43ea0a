//! Fuzz target for the polynomial expression parser.
//!
//! Parsing must never panic, and anything that parses must print back to an
//! expression that parses to the same value.

#![no_main]

use crckit::Polynomial;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let Ok(text) = core::str::from_utf8(data) else {
    return;
  };
  if let Ok(poly) = Polynomial::parse(text) {
    let printed = poly.to_string();
    assert_eq!(Polynomial::parse(&printed), Ok(poly), "round trip of {text:?} via {printed:?}");
  }
});
