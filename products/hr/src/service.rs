use async_trait::async_trait;
use entity::employee::ActiveModel;
use platform_db::EmployeeStore;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use tracing::{info, instrument, warn};

use crate::{Employee, EmployeeInput, HrError, HrResult};

/// Business operations on employees. One implementation exists; the trait
/// lets HTTP handlers run against a substitute in tests.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a new employee. Fails with [`HrError::DuplicateEmail`] when the
    /// email is already taken; nothing is written in that case.
    async fn save_employee(&self, input: EmployeeInput) -> HrResult<Employee>;

    async fn get_all_employees(&self) -> HrResult<Vec<Employee>>;

    async fn get_employee_by_id(&self, id: i64) -> HrResult<Option<Employee>>;

    /// Persist an already-merged record under its existing id.
    async fn update_employee(&self, employee: Employee) -> HrResult<Employee>;

    async fn delete_employee(&self, id: i64) -> HrResult<()>;
}

pub struct EmployeeServiceImpl<S> {
    store: S,
}

impl<S: EmployeeStore> EmployeeServiceImpl<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: EmployeeStore> EmployeeService for EmployeeServiceImpl<S> {
    #[instrument(name = "hr.save_employee", skip_all, fields(email = %input.email))]
    async fn save_employee(&self, input: EmployeeInput) -> HrResult<Employee> {
        if self.store.find_by_email(&input.email).await?.is_some() {
            warn!("employee email already registered");
            return Err(HrError::DuplicateEmail(input.email));
        }

        let saved = self
            .store
            .save(ActiveModel {
                id: NotSet,
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                email: Set(input.email),
            })
            .await?;
        info!(id = saved.id, "employee created");
        Ok(saved)
    }

    #[instrument(name = "hr.get_all_employees", skip_all)]
    async fn get_all_employees(&self) -> HrResult<Vec<Employee>> {
        Ok(self.store.find_all().await?)
    }

    #[instrument(name = "hr.get_employee_by_id", skip(self))]
    async fn get_employee_by_id(&self, id: i64) -> HrResult<Option<Employee>> {
        Ok(self.store.find_by_id(id).await?)
    }

    #[instrument(name = "hr.update_employee", skip_all, fields(id = employee.id))]
    async fn update_employee(&self, employee: Employee) -> HrResult<Employee> {
        let updated = self
            .store
            .save(ActiveModel {
                id: Unchanged(employee.id),
                first_name: Set(employee.first_name),
                last_name: Set(employee.last_name),
                email: Set(employee.email),
            })
            .await?;
        info!("employee updated");
        Ok(updated)
    }

    #[instrument(name = "hr.delete_employee", skip(self))]
    async fn delete_employee(&self, id: i64) -> HrResult<()> {
        self.store.delete_by_id(id).await?;
        info!("employee deleted");
        Ok(())
    }
}
