//! CompanyService - create/read/delete over the repository port
//!
//! The service owns no state of its own; it maps DTOs to entities,
//! hands them to whatever repository was injected, and maps the
//! results back.

use std::sync::Arc;

use tracing::{debug, info};

use registry_domain::{CompanyId, CompanyRepository, RepositoryError};

use crate::dto::CompanyDto;

/// Application service for the Company aggregate.
///
/// The repository is passed in at construction; callers decide whether
/// it is the in-memory store, SQLite, or a test double.
#[derive(Clone)]
pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// Persist a company with its nested employees and profile as one
    /// unit and return the generated identity.
    pub async fn add_company(&self, dto: CompanyDto) -> Result<CompanyId, RepositoryError> {
        let new_company = dto.into_new_company();
        let id = self.repository.insert(new_company).await?;
        info!(company_id = id.value(), "company created");
        Ok(id)
    }

    /// All companies with nested data, in insertion order.
    pub async fn get_all(&self) -> Result<Vec<CompanyDto>, RepositoryError> {
        let companies = self.repository.find_all().await?;
        debug!(count = companies.len(), "listed companies");
        Ok(companies.iter().map(CompanyDto::from_entity).collect())
    }

    /// One company, or `NotFound`.
    pub async fn get_by_id(&self, id: CompanyId) -> Result<CompanyDto, RepositoryError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(id))?;
        Ok(CompanyDto::from_entity(&company))
    }

    /// Delete a company. Employees and profile fall with it through the
    /// repository's cascade; the service adds no cleanup of its own.
    pub async fn delete_company(&self, id: CompanyId) -> Result<(), RepositoryError> {
        self.repository.delete(id).await?;
        info!(company_id = id.value(), "company deleted");
        Ok(())
    }
}
