//! Profile - The one-to-one registration record of a Company
//!
//! At most one profile per company. Like employees, profiles are owned
//! by the company and removed with it.

/// Registration details for a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    registered_capital: f64,
    cert_id: String,
}

impl Profile {
    pub fn new(registered_capital: f64, cert_id: impl Into<String>) -> Self {
        Self {
            registered_capital,
            cert_id: cert_id.into(),
        }
    }

    pub fn registered_capital(&self) -> f64 {
        self.registered_capital
    }

    pub fn cert_id(&self) -> &str {
        &self.cert_id
    }
}
