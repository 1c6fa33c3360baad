//! HTTP handlers for the employee REST API.
//!
//! Each handler validates its input, delegates to `EmployeeService`, and
//! lets `EmployeeError` turn failures into responses.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::employee::validation::{
    validate_create_employee_input, validate_employee_id, validate_search_request,
};
use crate::employee::{CreateEmployeeInput, Employee, EmployeeError, ValidationError};
use crate::http::error::log_failure;
use crate::http::server::AppState;

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, EmployeeError>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/employee
pub async fn get_all_employees(State(state): State<AppState>) -> HandlerResult<Vec<Employee>> {
    let employees = state
        .service
        .get_all_employees()
        .await
        .inspect_err(|e| log_failure(e, "Error while getting employees"))?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/search/{search_string}
pub async fn search_employees_by_name(
    State(state): State<AppState>,
    Path(search_string): Path<String>,
) -> HandlerResult<Vec<Employee>> {
    let result = async {
        validate_search_request(&search_string)?;
        state.service.search_by_name(&search_string).await
    }
    .await;

    let employees = result.inspect_err(|e| {
        log_failure(e, &format!("Error while searching employees by name '{search_string}'"))
    })?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/{id}
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Employee> {
    let result = async {
        let uuid = validate_employee_id(&id)?;
        state
            .service
            .get_by_id(uuid)
            .await?
            .ok_or_else(|| EmployeeError::NotFound(id.clone()))
    }
    .await;

    let employee =
        result.inspect_err(|e| log_failure(e, &format!("Error while getting employee by id {id}")))?;
    Ok(Json(employee))
}

/// GET /api/v1/employee/highestSalary
pub async fn get_highest_salary(State(state): State<AppState>) -> HandlerResult<u64> {
    let salary = state
        .service
        .highest_salary()
        .await
        .inspect_err(|e| log_failure(e, "Error while getting highest salary of employees"))?;
    Ok(Json(salary))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn get_top_ten_highest_earning_employee_names(
    State(state): State<AppState>,
) -> HandlerResult<Vec<String>> {
    let names = state.service.top_ten_earners().await.inspect_err(|e| {
        log_failure(e, "Error while getting top ten highest earning employee names")
    })?;
    Ok(Json(names))
}

/// POST /api/v1/employee
///
/// The body is decoded here rather than through the `Json` extractor so an
/// empty or `null` body reaches validation as a missing input.
pub async fn create_employee(State(state): State<AppState>, body: Bytes) -> HandlerResult<Employee> {
    let result = async {
        let input = parse_create_body(&body)?;
        let new_employee = validate_create_employee_input(input.as_ref())?;
        state.service.create_employee(&new_employee).await
    }
    .await;

    let employee = result.inspect_err(|e| log_failure(e, "Error while creating employee"))?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employee/{id}
pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, EmployeeError> {
    let result = async {
        let uuid = validate_employee_id(&id)?;
        state.service.delete_by_id(uuid).await
    }
    .await;

    result.inspect_err(|e| log_failure(e, &format!("Error while deleting employee by id {id}")))
}

fn parse_create_body(body: &[u8]) -> Result<Option<CreateEmployeeInput>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<CreateEmployeeInput>>(body)
        .map_err(|e| ValidationError::MalformedInput(e.to_string()))
}
