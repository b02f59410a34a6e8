//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::extract::{ApiJson, parse_id};
use crate::core::ServerState;
use crate::utils::AppResult;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.store.list().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = state.store.get(id).await?;
    Ok(Json(employee))
}

/// Create a new employee (id assigned by the store)
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let employee = state.store.create(payload).await?;
    tracing::info!(employee_id = employee.id, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = state.store.update(id, payload).await?;
    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(true))
}
