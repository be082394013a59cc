//! Company Repository - Abstract persistence for the Company aggregate
//!
//! The whole aggregate moves through this port as one unit: inserting a
//! company persists its employees and profile in the same transaction,
//! deleting one takes the dependents with it.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::company::{Company, CompanyId, NewCompany};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// Company not found
    #[error("company not found: {id}")]
    NotFound { id: i64 },
    /// A persistence constraint was violated (missing field, duplicate profile, ...)
    #[error("constraint violation: {message}")]
    Constraint { message: String },
    /// Failed to persist
    #[error("persistence error: {message}")]
    Persistence { message: String },
}

impl RepositoryError {
    pub fn not_found(id: CompanyId) -> Self {
        Self::NotFound { id: id.value() }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }
}

/// Company Repository Trait
///
/// The domain defines what it needs; adapters provide implementations.
/// All methods take `&self`: adapters manage their own interior
/// mutability (a lock around a map, a connection pool).
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company together with its employees and profile,
    /// returning the generated identity.
    async fn insert(&self, company: NewCompany) -> Result<CompanyId, RepositoryError>;

    /// All companies with their nested data, in insertion order
    /// (ascending id).
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError>;

    /// Find a company by ID
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError>;

    /// Delete a company. Its employees and profile are removed with it.
    /// Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: CompanyId) -> Result<(), RepositoryError>;

    /// Check if a company exists
    async fn exists(&self, id: CompanyId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Count all companies
    async fn count(&self) -> Result<usize, RepositoryError>;
}
