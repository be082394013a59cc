//! # Registry Domain Layer
//!
//! Entities and repository ports for the company registry.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                Domain Layer (This Crate)               │
//! │  model/      - Company aggregate (Employee, Profile)   │
//! │  repository/ - Trait definitions (not implementations) │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! `Company` is the only aggregate root here. Employees and profiles
//! live and die with their company; nothing outside the aggregate may
//! hold on to them. If we swap SQLite for Postgres, or the in-memory
//! store for either, this crate does not change.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    company::{Company, CompanyId, NewCompany},
    employee::Employee,
    profile::Profile,
};

pub use repository::company_repository::{CompanyRepository, RepositoryError};
