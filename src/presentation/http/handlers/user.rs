//! User Handlers
//!
//! Controllers for the user resource: each turns the request into a DTO or
//! key, calls one service operation, and maps the result to a response.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    AuditEntryResponse, EmailLookupQuery, MissingFields, UserDto, UserListResponse, UserPayload,
    UserResponse,
};
use crate::application::services::{
    AuditTrailService, CreateUserService, DeleteUserService, FindUserByEmailService,
    GetUserService, ListUsersService, UpdateUserService,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, AppError> {
    let users = state.list_users_service().list_users().await?;

    Ok(Json(UserListResponse::from(users)))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let dto = UserDto::try_from(body)?;

    let user = state.create_user_service().create(dto).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let user = state.get_user_service().get_user(user_id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Look a user up by email
pub async fn find_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailLookupQuery>,
) -> Result<Json<UserResponse>, AppError> {
    let email = query
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| MissingFields(vec!["email"]))?;

    let user = state.find_user_by_email_service().find_by_email(&email).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Replace a user's fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let dto = UserDto::try_from(body)?;

    let user = state.update_user_service().update(user_id, dto).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_user_id(&user_id)?;

    state.delete_user_service().delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Audit trail for a user
pub async fn get_audit_trail(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<AuditEntryResponse>>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let entries = state.audit_trail_service().audit_trail(user_id).await?;

    Ok(Json(entries.into_iter().map(AuditEntryResponse::from).collect()))
}
