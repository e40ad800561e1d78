use std::sync::Arc;

use crate::repository::TodoRepository;
use crate::usecases::TodoUseCases;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoUseCases>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            todos: Arc::new(TodoUseCases::new(repository)),
        }
    }
}
