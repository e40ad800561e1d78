pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod usecases;

use std::future::Future;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tracing::info;

use crate::db::SqliteTodoRepository;
use crate::routes::router;
use crate::state::AppState;

/// Serves the API on `listener` until `shutdown` resolves, then closes the pool.
pub async fn run<F>(listener: TcpListener, db: SqlitePool, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(Arc::new(SqliteTodoRepository::new(db.clone())));
    let app = router(state);

    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("closing database connections");
    db.close().await;
    Ok(())
}
