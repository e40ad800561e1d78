use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Todo, UpdateTodoDoneInput};
use crate::repository::TodoRepository;

pub struct UpdateTodoDone {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTodoDone {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, input: UpdateTodoDoneInput) -> Result<Todo, AppError> {
        Ok(self.repository.update_done(id, input).await?)
    }
}
