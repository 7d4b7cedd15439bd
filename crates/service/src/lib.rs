//! Service layer providing the business operations on top of `models`.
//! - Employee and car CRUD with the "empty list is not found" contract.
//! - The ownership registration workflow.
//! - One error type, `ServiceError`, that the HTTP layer maps to status codes.

pub mod errors;
pub mod employee_service;
pub mod car_service;
pub mod registration_service;
#[cfg(test)]
pub mod test_support;
