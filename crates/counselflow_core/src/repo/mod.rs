//! Repository layer for the compliance store.
//!
//! # Responsibility
//! - Define the read contract the compliance monitor depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`InvalidData`) in addition to DB
//!   transport errors.

pub mod compliance_repo;
