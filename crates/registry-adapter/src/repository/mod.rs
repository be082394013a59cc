//! Persistence implementations of the `CompanyRepository` port.
//!
//! Two adapters that differ in how they cascade deletes: the in-memory
//! store removes dependents itself, the SQLite store leans on
//! `ON DELETE CASCADE` foreign keys.

pub mod in_memory;
pub mod sqlite;
