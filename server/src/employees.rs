use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{FromRef, Path, State, rejection::PathRejection},
    http::StatusCode,
    routing::get,
};
use platform_api::{ApiError, ApiResult, internal_error};
use platform_db::is_unique_violation;
use products_hr::{Employee, EmployeeInput, EmployeeService, HrError};
use sea_orm::DbErr;
use tracing::instrument;

pub type SharedEmployeeService = Arc<dyn EmployeeService>;

/// `/api/employees` routes. Works for any router state the service handle
/// can be extracted from.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    SharedEmployeeService: FromRef<S>,
{
    Router::new()
        .route(
            "/api/employees",
            get(list_employees).post(create_employee),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

fn service_error(err: HrError) -> ApiError {
    match err {
        dup @ HrError::DuplicateEmail(_) => ApiError::Conflict(dup.to_string()),
        // The row vanished between the existence check and the update.
        HrError::Store(DbErr::RecordNotUpdated) => ApiError::NotFound,
        HrError::Store(db) if is_unique_violation(&db) => {
            ApiError::Conflict("email already in use".into())
        }
        HrError::Store(db) => internal_error(db),
    }
}

#[instrument(name = "http.employees.create", skip_all)]
async fn create_employee(
    State(service): State<SharedEmployeeService>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let saved = service.save_employee(input).await.map_err(service_error)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[instrument(name = "http.employees.list", skip_all)]
async fn list_employees(
    State(service): State<SharedEmployeeService>,
) -> ApiResult<Json<Vec<Employee>>> {
    let employees = service.get_all_employees().await.map_err(service_error)?;
    Ok(Json(employees))
}

fn employee_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

#[instrument(name = "http.employees.get", skip_all)]
async fn get_employee(
    State(service): State<SharedEmployeeService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(id)?;
    service
        .get_employee_by_id(id)
        .await
        .map_err(service_error)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[instrument(name = "http.employees.update", skip_all)]
async fn update_employee(
    State(service): State<SharedEmployeeService>,
    id: Result<Path<i64>, PathRejection>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(id)?;
    let mut existing = service
        .get_employee_by_id(id)
        .await
        .map_err(service_error)?
        .ok_or(ApiError::NotFound)?;
    input.apply_to(&mut existing);
    let updated = service
        .update_employee(existing)
        .await
        .map_err(service_error)?;
    Ok(Json(updated))
}

// Delete does not check existence; a missing id still reports success.
#[instrument(name = "http.employees.delete", skip_all)]
async fn delete_employee(
    State(service): State<SharedEmployeeService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<String> {
    let id = employee_id(id)?;
    service.delete_employee(id).await.map_err(service_error)?;
    Ok(format!("Employee with id: {id} deleted successfully"))
}
