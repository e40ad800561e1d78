use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router, http::StatusCode};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::api::{self, MessageResponse};
use crate::error::ErrorResponse;
use crate::state::AppState;

pub const HEALTH_MESSAGE: &str = "Todo API is running!";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/todos/{id}",
            get(api::get_todo).put(api::update_todo).delete(api::delete_todo),
        )
        .route("/todos/{id}/done", patch(api::update_todo_done))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };
    error!("handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
