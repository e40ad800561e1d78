mod create_todo;
mod delete_todo;
mod get_todo_by_id;
mod get_todos;
mod update_todo;
mod update_todo_done;

use std::sync::Arc;

use crate::repository::TodoRepository;

pub use create_todo::CreateTodo;
pub use delete_todo::DeleteTodo;
pub use get_todo_by_id::GetTodoById;
pub use get_todos::GetTodos;
pub use update_todo::UpdateTodo;
pub use update_todo_done::UpdateTodoDone;

/// Every todo use case, wired to one repository.
pub struct TodoUseCases {
    pub create: CreateTodo,
    pub list: GetTodos,
    pub get_by_id: GetTodoById,
    pub update: UpdateTodo,
    pub update_done: UpdateTodoDone,
    pub delete: DeleteTodo,
}

impl TodoUseCases {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            create: CreateTodo::new(repository.clone()),
            list: GetTodos::new(repository.clone()),
            get_by_id: GetTodoById::new(repository.clone()),
            update: UpdateTodo::new(repository.clone()),
            update_done: UpdateTodoDone::new(repository.clone()),
            delete: DeleteTodo::new(repository),
        }
    }
}
