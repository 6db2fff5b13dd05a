//! Service layer for the record store.
//! - `storage` holds the generic in-memory map behind a single lock.
//! - `records` defines the repository seam and the business rules on top of it.

pub mod errors;
pub mod records;
pub mod storage;
