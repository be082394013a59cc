//! # Registry Use Case Layer
//!
//! Application-specific rules: `CompanyService` orchestrates the flow
//! between the HTTP controller and the repository port, translating
//! transfer objects to domain entities and back.

pub mod dto;
pub mod service;

pub use dto::{CompanyDto, EmployeeDto, ProfileDto};
pub use service::CompanyService;
