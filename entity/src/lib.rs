//! sea-orm entities for the employee directory.

pub mod employee;

pub use employee::Model as Employee;
