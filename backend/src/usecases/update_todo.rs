use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Todo, UpdateTodoInput};
use crate::repository::TodoRepository;

pub struct UpdateTodo {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, input: UpdateTodoInput) -> Result<Todo, AppError> {
        Ok(self.repository.update(id, input).await?)
    }
}
