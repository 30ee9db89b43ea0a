//! Process-wide cache of runtime lookup tables.
//!
//! A table depends only on (backing width, polynomial, CRC width, bit order),
//! so runtime profiles sharing those share one immutable `Arc` table. Tables
//! are generated once under the lock and never mutated afterwards.
//!
//! Entries are never evicted: the cache holds one table per distinct key for
//! the life of the process.
//!
//! `const` profiles never touch the cache: their tables live in the binary.

use std::{
  any::Any,
  collections::HashMap,
  sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::{dynamic::build_table, register::Register, strategy::BitOrder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TableKey {
  bits: u32,
  poly: u64,
  width: u8,
  order: BitOrder,
}

type Slot = Arc<dyn Any + Send + Sync>;

fn tables() -> &'static Mutex<HashMap<TableKey, Slot>> {
  static TABLES: OnceLock<Mutex<HashMap<TableKey, Slot>>> = OnceLock::new();
  TABLES.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Fetch (or build and insert) the table for `poly` of `width` bits.
///
/// `width` must already be validated against `W::BITS`.
///
/// The cache only grows. Each distinct (backing width, polynomial, CRC width,
/// bit order) adds one table that stays until the process exits.
#[must_use]
pub fn table<W: Register>(poly: W, width: u8, order: BitOrder) -> Arc<[W; 256]> {
  let key = TableKey { bits: W::BITS, poly: poly.into_u64(), width, order };
  // Tables are inserted whole, so a poisoned map is still consistent.
  let mut map = tables().lock().unwrap_or_else(PoisonError::into_inner);

  if let Some(slot) = map.get(&key) {
    if let Ok(table) = Arc::clone(slot).downcast::<[W; 256]>() {
      log_trace!(target: "crckit::cache", bits = key.bits, poly = key.poly, width, "table cache hit");
      return table;
    }
  }

  log_debug!(target: "crckit::cache", bits = key.bits, poly = key.poly, width, ?order, "table cache miss");
  let table = Arc::new(build_table(poly, width, order));
  map.insert(key, Arc::clone(&table) as Slot);
  table
}

/// Number of cached tables.
#[must_use]
pub fn len() -> usize {
  tables().lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// True when no table has been cached yet.
#[must_use]
pub fn is_empty() -> bool {
  len() == 0
}
