use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{CreateTodoInput, Todo, UpdateTodoDoneInput, UpdateTodoInput};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The targeted row did not exist when a write was attempted.
    #[error("Record to {operation} not found.")]
    RecordNotFound { operation: &'static str },
}

/// Persistence port for todos.
///
/// Lookups report absence as `Ok(None)`. Writes against a missing id fail
/// with [`RepositoryError::RecordNotFound`].
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, newest first.
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, RepositoryError>;
    async fn create(&self, input: CreateTodoInput) -> Result<Todo, RepositoryError>;
    async fn update(&self, id: &str, input: UpdateTodoInput) -> Result<Todo, RepositoryError>;
    async fn update_done(
        &self,
        id: &str,
        input: UpdateTodoDoneInput,
    ) -> Result<Todo, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Process-local store, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        let mut all: Vec<Todo> = todos.iter().rev().cloned().collect();
        // stable sort keeps the newest insertion first among equal timestamps
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: CreateTodoInput) -> Result<Todo, RepositoryError> {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            is_done: false,
            created_at: now,
            updated_at: now,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, input: UpdateTodoInput) -> Result<Todo, RepositoryError> {
        let mut todos = self.todos.write().await;
        let current = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::RecordNotFound { operation: "update" })?;

        if let Some(title) = input.title {
            current.title = title;
        }
        if let Some(description) = input.description {
            current.description = description;
        }
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    async fn update_done(
        &self,
        id: &str,
        input: UpdateTodoDoneInput,
    ) -> Result<Todo, RepositoryError> {
        let mut todos = self.todos.write().await;
        let current = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::RecordNotFound { operation: "update" })?;

        current.is_done = input.is_done;
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut todos = self.todos.write().await;
        let position = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(RepositoryError::RecordNotFound { operation: "delete" })?;
        todos.remove(position);
        Ok(())
    }
}
