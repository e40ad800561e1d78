use std::sync::Arc;

use crate::error::AppError;
use crate::repository::TodoRepository;

pub struct DeleteTodo {
    repository: Arc<dyn TodoRepository>,
}

impl DeleteTodo {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
