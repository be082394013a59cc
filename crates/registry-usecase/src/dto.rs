//! Transfer objects - the JSON shapes of the HTTP surface
//!
//! Wire format uses PascalCase keys:
//! `{"Name": "IBM", "Employees": [{"Name": "Tom", "Age": 19}],
//!   "Profile": {"RegisteredCapital": 100010, "CertId": "100"}}`
//!
//! `Id` is present on responses and ignored on create requests; the
//! store generates identities.

use serde::{Deserialize, Serialize};

use registry_domain::{Company, Employee, NewCompany, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<EmployeeDto>,
    #[serde(default)]
    pub profile: Option<ProfileDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeDto {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileDto {
    pub registered_capital: f64,
    pub cert_id: String,
}

impl CompanyDto {
    /// Shape a persisted company for the wire.
    pub fn from_entity(company: &Company) -> Self {
        Self {
            id: Some(company.id().value()),
            name: company.name().to_string(),
            employees: company
                .employees()
                .iter()
                .map(EmployeeDto::from_entity)
                .collect(),
            profile: company.profile().map(ProfileDto::from_entity),
        }
    }

    /// Turn a create request into the aggregate the repository persists.
    /// Any client-supplied `Id` is dropped here.
    pub fn into_new_company(self) -> NewCompany {
        NewCompany {
            name: self.name,
            employees: self
                .employees
                .into_iter()
                .map(EmployeeDto::into_entity)
                .collect(),
            profile: self.profile.map(ProfileDto::into_entity),
        }
    }
}

impl EmployeeDto {
    pub fn from_entity(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            age: employee.age(),
        }
    }

    pub fn into_entity(self) -> Employee {
        Employee::new(self.name, self.age)
    }
}

impl ProfileDto {
    pub fn from_entity(profile: &Profile) -> Self {
        Self {
            registered_capital: profile.registered_capital(),
            cert_id: profile.cert_id().to_string(),
        }
    }

    pub fn into_entity(self) -> Profile {
        Profile::new(self.registered_capital, self.cert_id)
    }
}
