//! In-Memory Company Repository
//!
//! Thread-safe implementation using RwLock. The store owns three row
//! collections, one per entity kind, mirroring the relational layout:
//! employees and profiles reference their company by id. Cascade on
//! delete is explicit application logic here.
//!
//! Useful for testing and development; also the default store of the
//! server binary when no database URL is given.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use registry_domain::{
    Company, CompanyId, CompanyRepository, Employee, NewCompany, Profile, RepositoryError,
};

#[derive(Debug, Clone)]
struct CompanyRow {
    name: String,
}

#[derive(Debug, Clone)]
struct EmployeeRow {
    company_id: i64,
    name: String,
    age: i32,
}

#[derive(Debug, Clone)]
struct ProfileRow {
    company_id: i64,
    registered_capital: f64,
    cert_id: String,
}

/// Row ids are allocated from a single ascending counter per table, so
/// iterating the BTreeMaps yields insertion order.
#[derive(Debug, Default)]
struct Store {
    companies: BTreeMap<i64, CompanyRow>,
    employees: BTreeMap<i64, EmployeeRow>,
    profiles: BTreeMap<i64, ProfileRow>,
    next_company_id: i64,
    next_employee_id: i64,
    next_profile_id: i64,
}

impl Store {
    fn materialize(&self, id: i64, row: &CompanyRow) -> Company {
        let employees = self
            .employees
            .values()
            .filter(|e| e.company_id == id)
            .map(|e| Employee::new(e.name.clone(), e.age));
        let profile = self
            .profiles
            .values()
            .find(|p| p.company_id == id)
            .map(|p| Profile::new(p.registered_capital, p.cert_id.clone()));

        let mut company = Company::new(CompanyId::new(id), row.name.clone()).with_employees(employees);
        if let Some(profile) = profile {
            company = company.with_profile(profile);
        }
        company
    }
}

/// In-memory Company Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompanyRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of employee rows across all companies.
    pub fn employee_count(&self) -> usize {
        self.store.read().map(|s| s.employees.len()).unwrap_or(0)
    }

    /// Number of profile rows across all companies.
    pub fn profile_count(&self) -> usize {
        self.store.read().map(|s| s.profiles.len()).unwrap_or(0)
    }
}

fn lock_poisoned() -> RepositoryError {
    RepositoryError::persistence("store lock poisoned")
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, company: NewCompany) -> Result<CompanyId, RepositoryError> {
        let mut store = self.store.write().map_err(|_| lock_poisoned())?;

        store.next_company_id += 1;
        let company_id = store.next_company_id;
        store.companies.insert(
            company_id,
            CompanyRow {
                name: company.name,
            },
        );

        for employee in company.employees {
            store.next_employee_id += 1;
            let employee_id = store.next_employee_id;
            store.employees.insert(
                employee_id,
                EmployeeRow {
                    company_id,
                    name: employee.name().to_string(),
                    age: employee.age(),
                },
            );
        }

        if let Some(profile) = company.profile {
            store.next_profile_id += 1;
            let profile_id = store.next_profile_id;
            store.profiles.insert(
                profile_id,
                ProfileRow {
                    company_id,
                    registered_capital: profile.registered_capital(),
                    cert_id: profile.cert_id().to_string(),
                },
            );
        }

        Ok(CompanyId::new(company_id))
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        let store = self.store.read().map_err(|_| lock_poisoned())?;
        Ok(store
            .companies
            .iter()
            .map(|(id, row)| store.materialize(*id, row))
            .collect())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError> {
        let store = self.store.read().map_err(|_| lock_poisoned())?;
        Ok(store
            .companies
            .get(&id.value())
            .map(|row| store.materialize(id.value(), row)))
    }

    async fn delete(&self, id: CompanyId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().map_err(|_| lock_poisoned())?;

        if store.companies.remove(&id.value()).is_none() {
            return Err(RepositoryError::not_found(id));
        }

        // Application-level cascade: dependents go with the company.
        store.employees.retain(|_, e| e.company_id != id.value());
        store.profiles.retain(|_, p| p.company_id != id.value());
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().map_err(|_| lock_poisoned())?;
        Ok(store.companies.len())
    }
}
