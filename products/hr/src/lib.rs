//! HR vertical slice: the employee directory service.

mod seed;
mod service;

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use entity::Employee;
pub use seed::{demo_employees, seed_demo};
pub use service::{EmployeeService, EmployeeServiceImpl};

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee already exists with given email : {0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    Store(#[from] DbErr),
}

/// Employee fields supplied by a caller; the id is always store-assigned.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Overwrite the three mutable fields of `employee`, keeping its id.
    pub fn apply_to(self, employee: &mut Employee) {
        employee.first_name = self.first_name;
        employee.last_name = self.last_name;
        employee.email = self.email;
    }
}
