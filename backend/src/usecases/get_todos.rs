use std::sync::Arc;

use crate::error::AppError;
use crate::models::Todo;
use crate::repository::TodoRepository;

pub struct GetTodos {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodos {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.repository.find_all().await?)
    }
}
