use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, Payload, StatusDto},
        employee::{
            CreateEmployeeDto, EmployeeDto, EmployeeProfileDto, PaginatedEmployeesDto,
            UpdateEmployeeDto,
        },
    },
    server::{
        controller::{per_page, total_pages},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::employee::{CreateEmployeeParams, UpdateEmployeeParams},
        service::employee::EmployeeService,
        state::AppState,
        validate::ValidatedJson,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

#[derive(Deserialize)]
pub struct EmployeeListParams {
    /// Substring filter on the full name.
    pub name: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
}

/// Create a new employee.
///
/// Registers an employee record with contact details and hire date. New
/// employees start in the active state. Only accessible by admins.
///
/// # Returns
/// - `201 Created` - Successfully created employee, body carries the new id
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - An employee with this email already exists
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = CreatedDto),
        (status = 400, description = "Invalid employee data", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 409, description = "Duplicate email", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn add_employee(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = EmployeeService::new(&state.db);

    let employee = service
        .create(CreateEmployeeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(employee.id))))
}

/// Get a page of employees.
///
/// Returns employees ordered by name, optionally filtered by a name
/// substring. Accessible by any logged-in account.
///
/// # Returns
/// - `200 OK` - Page of employees
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = EMPLOYEE_TAG,
    params(
        ("name" = Option<String>, Query, description = "Substring filter on the full name"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of employees", body = PaginatedEmployeesDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<EmployeeListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = EmployeeService::new(&state.db);

    let per_page = per_page(params.entries);
    let (employees, total) = service
        .get_paginated(params.name, params.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Payload::ok(PaginatedEmployeesDto {
            employees: employees.into_iter().map(EmployeeDto::from).collect(),
            total,
            page: params.page,
            per_page,
            total_pages: total_pages(total, per_page),
        })),
    ))
}

/// Get a specific employee by id.
///
/// # Returns
/// - `200 OK` - Employee details
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No employee with this id
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee details", body = EmployeeDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 404, description = "Employee not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = EmployeeService::new(&state.db);

    let employee = service.get_by_id(id).await?;

    match employee {
        Some(employee) => Ok((
            StatusCode::OK,
            Json(Payload::ok(EmployeeDto::from(employee))),
        )),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Get an employee's profile view.
///
/// The profile combines the employee record with the unread-notification
/// count of the linked account and the current salary. The two secondary
/// lookups are best-effort: when one fails, the profile is served without
/// that field and a warning is logged.
///
/// # Returns
/// - `200 OK` - Profile, possibly without the optional fields
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No employee with this id
#[utoipa::path(
    get,
    path = "/api/employees/{id}/profile",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee profile", body = EmployeeProfileDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 404, description = "Employee not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn get_employee_profile(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = EmployeeService::new(&state.db);

    let profile = service.get_profile(id).await?;

    match profile {
        Some(profile) => Ok((StatusCode::OK, Json(Payload::ok(profile.into_dto())))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Update an employee.
///
/// Overwrites contact details, position and active flag. Only accessible by
/// admins.
///
/// # Returns
/// - `200 OK` - Updated employee
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No employee with this id
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeDto),
        (status = 400, description = "Invalid employee data", body = StatusDto),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Employee not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = EmployeeService::new(&state.db);

    let employee = service
        .update(UpdateEmployeeParams::from_dto(id, payload))
        .await?;

    match employee {
        Some(employee) => Ok((
            StatusCode::OK,
            Json(Payload::ok(EmployeeDto::from(employee))),
        )),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Delete an employee.
///
/// Removes the employee and, through cascading deletes, their dependent
/// records. Only accessible by admins.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No employee with this id
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 204, description = "Successfully deleted employee"),
        (status = 401, description = "Not logged in", body = StatusDto),
        (status = 403, description = "Not an admin", body = StatusDto),
        (status = 404, description = "Employee not found", body = StatusDto),
        (status = 500, description = "Internal server error", body = StatusDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = EmployeeService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Employee not found".to_string()))
    }
}
