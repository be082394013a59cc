//! Employee - An owned record inside the Company aggregate
//!
//! Employees have no independent lifecycle: they belong to exactly one
//! company and are removed with it.

/// An employee of a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    age: i32,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
