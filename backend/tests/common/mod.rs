#![allow(dead_code)]

use std::sync::Arc;

use sqlx::SqlitePool;
use todo_backend::config::Config;
use todo_backend::db::{self, SqliteTodoRepository};
use todo_backend::models::{CreateTodoInput, Todo};
use todo_backend::repository::{InMemoryTodoRepository, TodoRepository};

pub const MISSING_ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

/// A migrated in-memory database. A single connection keeps every query on
/// the same database.
pub async fn memory_pool() -> SqlitePool {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    db::connect(&config).await.expect("Failed to create database")
}

pub async fn sqlite_repository() -> Arc<dyn TodoRepository> {
    Arc::new(SqliteTodoRepository::new(memory_pool().await))
}

pub fn in_memory_repository() -> Arc<dyn TodoRepository> {
    Arc::new(InMemoryTodoRepository::new())
}

pub fn input(title: &str, description: &str) -> CreateTodoInput {
    CreateTodoInput {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub async fn create(repository: &dyn TodoRepository, title: &str) -> Todo {
    repository
        .create(input(title, "description"))
        .await
        .expect("Failed to create todo")
}

/// Lets the clock move so `updated_at` comparisons are strict.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
