//! Repository Traits - The "Ports" of the registry
//!
//! These traits define HOW the domain wants to persist data,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼──────────────────────────
//! trait CompanyRepo     │  SqliteCompanyRepository
//!   fn insert()         │  InMemoryCompanyRepository
//!   fn find_all()       │
//! ```

pub mod company_repository;
