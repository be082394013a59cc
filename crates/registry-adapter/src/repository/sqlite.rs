//! SQLite Company Repository
//!
//! Backed by a sqlx connection pool. The relational layout matches the
//! in-memory store's three collections; cascading delete is handled by
//! `ON DELETE CASCADE` foreign keys, so `delete` only touches the
//! companies table.
//!
//! For `sqlite::memory:` URLs the pool is pinned to a single connection
//! that never expires, otherwise every checkout would see a fresh
//! empty database.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use registry_domain::{
    Company, CompanyId, CompanyRepository, Employee, NewCompany, Profile, RepositoryError,
};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS companies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company_id INTEGER NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        age INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS profiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company_id INTEGER NOT NULL UNIQUE REFERENCES companies(id) ON DELETE CASCADE,
        registered_capital REAL NOT NULL,
        cert_id TEXT NOT NULL
    )",
];

/// SQLite-backed Company Repository
#[derive(Debug, Clone)]
pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    /// Open (creating if necessary) the database at `url` and make sure
    /// the schema exists. Foreign key enforcement is switched on for
    /// every connection; the cascade depends on it.
    pub async fn connect(url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| RepositoryError::persistence(e.to_string()))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(map_sqlx_err)?;

        let repository = Self { pool };
        repository.ensure_schema().await?;
        Ok(repository)
    }

    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_err)?;
        }
        Ok(())
    }
}

fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => RepositoryError::constraint(db.message()),
            _ => RepositoryError::persistence(err.to_string()),
        },
        _ => RepositoryError::persistence(err.to_string()),
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn insert(&self, company: NewCompany) -> Result<CompanyId, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        let company_id: i64 = sqlx::query_scalar("INSERT INTO companies (name) VALUES (?) RETURNING id")
            .bind(&company.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

        for employee in &company.employees {
            sqlx::query("INSERT INTO employees (company_id, name, age) VALUES (?, ?, ?)")
                .bind(company_id)
                .bind(employee.name())
                .bind(employee.age())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;
        }

        if let Some(profile) = &company.profile {
            sqlx::query(
                "INSERT INTO profiles (company_id, registered_capital, cert_id) VALUES (?, ?, ?)",
            )
            .bind(company_id)
            .bind(profile.registered_capital())
            .bind(profile.cert_id())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(CompanyId::new(company_id))
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        let company_rows = sqlx::query("SELECT id, name FROM companies ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        let employee_rows =
            sqlx::query("SELECT company_id, name, age FROM employees ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_err)?;
        let profile_rows =
            sqlx::query("SELECT company_id, registered_capital, cert_id FROM profiles")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        let mut employees_by_company: HashMap<i64, Vec<Employee>> = HashMap::new();
        for row in employee_rows {
            employees_by_company
                .entry(row.get("company_id"))
                .or_default()
                .push(Employee::new(row.get::<String, _>("name"), row.get("age")));
        }

        let mut profiles_by_company: HashMap<i64, Profile> = HashMap::new();
        for row in profile_rows {
            profiles_by_company.insert(
                row.get("company_id"),
                Profile::new(row.get("registered_capital"), row.get::<String, _>("cert_id")),
            );
        }

        let mut companies = Vec::with_capacity(company_rows.len());
        for row in company_rows {
            let id: i64 = row.get("id");
            let mut company = Company::new(CompanyId::new(id), row.get::<String, _>("name"))
                .with_employees(employees_by_company.remove(&id).unwrap_or_default());
            if let Some(profile) = profiles_by_company.remove(&id) {
                company = company.with_profile(profile);
            }
            companies.push(company);
        }
        Ok(companies)
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM companies WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let employee_rows =
            sqlx::query("SELECT name, age FROM employees WHERE company_id = ? ORDER BY id")
                .bind(id.value())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_err)?;
        let profile_row =
            sqlx::query("SELECT registered_capital, cert_id FROM profiles WHERE company_id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        let mut company = Company::new(id, row.get::<String, _>("name")).with_employees(
            employee_rows
                .iter()
                .map(|r| Employee::new(r.get::<String, _>("name"), r.get("age"))),
        );
        if let Some(r) = profile_row {
            company = company.with_profile(Profile::new(
                r.get("registered_capital"),
                r.get::<String, _>("cert_id"),
            ));
        }
        Ok(Some(company))
    }

    async fn delete(&self, id: CompanyId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_repo() -> SqliteCompanyRepository {
        SqliteCompanyRepository::connect("sqlite::memory:")
            .await
            .unwrap()
    }

    fn sample_company() -> NewCompany {
        NewCompany::new("IBM")
            .with_employee(Employee::new("Tom", 19))
            .with_profile(Profile::new(100010.0, "100"))
    }

    async fn table_count(repo: &SqliteCompanyRepository, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_all() {
        let repo = memory_repo().await;

        repo.insert(sample_company()).await.unwrap();
        let companies = repo.find_all().await.unwrap();

        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name(), "IBM");
        assert_eq!(companies[0].employees(), [Employee::new("Tom", 19)]);
        assert_eq!(
            companies[0].profile(),
            Some(&Profile::new(100010.0, "100"))
        );
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = memory_repo().await;

        let id = repo.insert(sample_company()).await.unwrap();
        let company = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(company.id(), id);
        assert_eq!(company.employees().len(), 1);

        assert!(repo.find_by_id(CompanyId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_foreign_keys_cascade_on_delete() {
        let repo = memory_repo().await;

        let id = repo.insert(sample_company()).await.unwrap();
        assert_eq!(table_count(&repo, "employees").await, 1);
        assert_eq!(table_count(&repo, "profiles").await, 1);

        repo.delete(id).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(table_count(&repo, "employees").await, 0);
        assert_eq!(table_count(&repo, "profiles").await, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = memory_repo().await;

        let err = repo.delete(CompanyId::new(40)).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { id: 40 });
    }

    #[tokio::test]
    async fn test_listing_preserves_insertion_order() {
        let repo = memory_repo().await;

        repo.insert(NewCompany::new("First")).await.unwrap();
        repo.insert(NewCompany::new("Second")).await.unwrap();
        repo.insert(NewCompany::new("Third")).await.unwrap();

        let companies = repo.find_all().await.unwrap();
        let names: Vec<&str> = companies.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_second_profile_for_same_company_is_rejected() {
        let repo = memory_repo().await;

        let id = repo.insert(sample_company()).await.unwrap();
        let err = sqlx::query(
            "INSERT INTO profiles (company_id, registered_capital, cert_id) VALUES (?, ?, ?)",
        )
        .bind(id.value())
        .bind(1.0)
        .bind("200")
        .execute(&repo.pool)
        .await
        .map_err(map_sqlx_err)
        .unwrap_err();

        assert!(matches!(err, RepositoryError::Constraint { .. }));
    }
}
