//! Company - The aggregate root of the registry
//!
//! Company is an Entity (has identity). Its employees and profile are
//! owned records: they are created together with the company and are
//! destroyed when the company is destroyed. They carry no identity of
//! their own outside the persistence layer.

use super::employee::Employee;
use super::profile::Profile;

/// Unique identifier for a Company, generated by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanyId(i64);

impl CompanyId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A company as it comes back from the store: identity plus the full
/// owned aggregate. Employees keep their insertion order.
#[derive(Debug, Clone)]
pub struct Company {
    id: CompanyId,
    name: String,
    employees: Vec<Employee>,
    profile: Option<Profile>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            employees: Vec::new(),
            profile: None,
        }
    }

    /// Builder: add an employee
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Builder: add employees
    pub fn with_employees(mut self, employees: impl IntoIterator<Item = Employee>) -> Self {
        self.employees.extend(employees);
        self
    }

    /// Builder: set the profile
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Company {}

/// A company waiting to be persisted: the whole aggregate minus the
/// identity, which the store generates on insert.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub employees: Vec<Employee>,
    pub profile: Option<Profile>,
}

impl NewCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
            profile: None,
        }
    }

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    pub fn with_employees(mut self, employees: impl IntoIterator<Item = Employee>) -> Self {
        self.employees.extend(employees);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }
}
