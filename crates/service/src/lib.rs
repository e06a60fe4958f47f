//! Service layer: records, the in-memory store and the repositories built on it.
//! - `storage` holds the generic store and the `Record` trait.
//! - `repository` exposes one repository per record type behind a common trait.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod storage;
