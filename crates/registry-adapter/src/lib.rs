//! # Registry Adapter Layer
//!
//! External system integrations.
//!
//! - `controller/` - Inbound adapter (axum HTTP controller)
//! - `repository/` - Persistence implementations of the domain ports

pub mod controller;
pub mod repository;

pub use controller::http::router;
pub use repository::in_memory::InMemoryCompanyRepository;
pub use repository::sqlite::SqliteCompanyRepository;
