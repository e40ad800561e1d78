use std::sync::Arc;

use crate::error::AppError;
use crate::models::Todo;
use crate::repository::TodoRepository;

pub const TODO_NOT_FOUND: &str = "Todo not found";

pub struct GetTodoById {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodoById {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// The only use case that treats a missing row as `NotFound`.
    pub async fn execute(&self, id: &str) -> Result<Todo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TODO_NOT_FOUND.to_string()))
    }
}
