//! Storage layer: typed entities for `employees` and `cars`, their field
//! constraints and the store connection.

pub mod errors;
pub mod db;
pub mod employee;
pub mod car;

#[cfg(test)]
mod tests;
