pub mod todo;

pub use todo::{CreateTodoInput, Todo, UpdateTodoDoneInput, UpdateTodoInput};
