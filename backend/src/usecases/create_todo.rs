use std::sync::Arc;

use crate::error::AppError;
use crate::models::{CreateTodoInput, Todo};
use crate::repository::TodoRepository;

pub struct CreateTodo {
    repository: Arc<dyn TodoRepository>,
}

impl CreateTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CreateTodoInput) -> Result<Todo, AppError> {
        Ok(self.repository.create(input).await?)
    }
}
