//! Domain Models - The vocabulary of the registry
//!
//! Every name here should match how we talk about the system:
//! a company owns employees and at most one profile.

pub mod company;
pub mod employee;
pub mod profile;
