use tracing::info;

use crate::{EmployeeInput, EmployeeService, HrError, HrResult};

/// Fixture employees used by the `seed` command.
pub fn demo_employees() -> Vec<EmployeeInput> {
    vec![
        EmployeeInput::new("harshal", "aher", "harshal@abc.com"),
        EmployeeInput::new("raju", "rastogi", "raju@abc.com"),
        EmployeeInput::new("michael", "scott", "michael@abc.com"),
        EmployeeInput::new("tony", "robbins", "tony@abc.com"),
    ]
}

/// Insert the demo employees through `service`, skipping emails that are
/// already present. Returns how many rows were created.
pub async fn seed_demo(service: &dyn EmployeeService) -> HrResult<usize> {
    let mut created = 0;
    for input in demo_employees() {
        match service.save_employee(input).await {
            Ok(employee) => {
                created += 1;
                info!(id = employee.id, email = %employee.email, "seeded employee");
            }
            Err(HrError::DuplicateEmail(email)) => {
                info!(%email, "employee already seeded");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(created)
}
