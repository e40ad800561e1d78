use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{CreateTodoInput, Todo, UpdateTodoDoneInput, UpdateTodoInput};
use crate::repository::{RepositoryError, TodoRepository};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    db: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_done, created_at, updated_at FROM todos ORDER BY created_at DESC, rowid DESC"
        )
        .fetch_all(&self.db)
        .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, RepositoryError> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_done, created_at, updated_at FROM todos WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(todo)
    }

    async fn create(&self, input: CreateTodoInput) -> Result<Todo, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, title, description, is_done, created_at, updated_at)
            VALUES (?1, ?2, ?3, 0, ?4, ?4)
            RETURNING id, title, description, is_done, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(now)
        .fetch_one(&self.db)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: &str, input: UpdateTodoInput) -> Result<Todo, RepositoryError> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = COALESCE(?1, title),
                description = COALESCE(?2, description),
                updated_at = ?3
            WHERE id = ?4
            RETURNING id, title, description, is_done, created_at, updated_at
            "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(RepositoryError::RecordNotFound { operation: "update" })
    }

    async fn update_done(
        &self,
        id: &str,
        input: UpdateTodoDoneInput,
    ) -> Result<Todo, RepositoryError> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET is_done = ?1,
                updated_at = ?2
            WHERE id = ?3
            RETURNING id, title, description, is_done, created_at, updated_at
            "#,
        )
        .bind(input.is_done)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(RepositoryError::RecordNotFound { operation: "update" })
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();

        if result == 0 {
            return Err(RepositoryError::RecordNotFound { operation: "delete" });
        }
        Ok(())
    }
}
