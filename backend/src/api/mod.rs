use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AppError, FieldError};
use crate::models::Todo;
use crate::schemas;
use crate::state::AppState;

pub const VALIDATION_ERROR: &str = "Validation error";
pub const INVALID_ID_FORMAT: &str = "Invalid ID format";
pub const TODO_DELETED: &str = "Todo deleted successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parses the body as JSON regardless of its content type. Unparseable
/// bodies are reported like any other shape failure.
fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        AppError::validation(
            VALIDATION_ERROR,
            vec![FieldError::new("body", format!("Invalid JSON: {}", err))],
        )
    })
}

fn parse_id(raw: &str, message: &str) -> Result<String, AppError> {
    schemas::validate_id(raw).map_err(|details| AppError::validation(message, details))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let body = parse_body(&body)?;
    let input = schemas::validate_create(&body)
        .map_err(|details| AppError::validation(VALIDATION_ERROR, details))?;

    let todo = state.todos.create.execute(input).await?;
    info!("created todo {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.list.execute().await?;
    debug!("listing {} todos", todos.len());
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id, INVALID_ID_FORMAT)?;
    let todo = state.todos.get_by_id.execute(&id).await?;
    Ok(Json(todo))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id, VALIDATION_ERROR)?;
    let body = parse_body(&body)?;
    let input = schemas::validate_update(&body)
        .map_err(|details| AppError::validation(VALIDATION_ERROR, details))?;

    let todo = state.todos.update.execute(&id, input).await?;
    info!("updated todo {}", todo.id);
    Ok(Json(todo))
}

pub async fn update_todo_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id, VALIDATION_ERROR)?;
    let body = parse_body(&body)?;
    let input = schemas::validate_update_done(&body)
        .map_err(|details| AppError::validation(VALIDATION_ERROR, details))?;

    let todo = state.todos.update_done.execute(&id, input).await?;
    info!("marked todo {} done={}", todo.id, todo.is_done);
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, INVALID_ID_FORMAT)?;
    state.todos.delete.execute(&id).await?;
    info!("deleted todo {}", id);
    Ok(Json(MessageResponse {
        message: TODO_DELETED.to_string(),
    }))
}
