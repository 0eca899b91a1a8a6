use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::core::{ApiError, Task};
use crate::storage::TaskStore;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// HTTP front for a [`TaskStore`]. Each handler performs exactly one storage
/// operation and maps absence to a 404 with a human-readable message.
pub struct HttpServer<S: TaskStore + 'static> {
    store: Arc<S>,
}

impl<S: TaskStore + 'static> HttpServer<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/tarefas", get(list_tasks::<S>).post(create_task::<S>))
            .route("/tarefas/concluida", get(list_done::<S>))
            .route(
                "/tarefas/{id}",
                get(get_task::<S>)
                    .put(update_task::<S>)
                    .delete(delete_task::<S>),
            )
            .with_state(self.store.clone())
    }

    pub async fn serve(&self, addr: &str) -> anyhow::Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        #[cfg(feature = "tracing")]
        info!(addr = %addr, "HTTP server started");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

async fn index() -> &'static str {
    "Olá mundo!"
}

async fn list_tasks<S: TaskStore>(State(store): State<Arc<S>>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(store.list_all().await?))
}

async fn get_task<S: TaskStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, ApiError> {
    let task = store.find_by_id(id).await?.ok_or(ApiError::TaskNotFound)?;
    Ok(Json(task))
}

async fn list_done<S: TaskStore>(State(store): State<Arc<S>>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(store.list_where(|t| t.is_done).await?))
}

async fn create_task<S: TaskStore>(
    State(store): State<Arc<S>>,
    Json(task): Json<Task>,
) -> Result<impl IntoResponse, ApiError> {
    let created = store.insert(task).await?;
    #[cfg(feature = "tracing")]
    debug!(id = created.id, "Task created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/tarefas/{}", created.id))],
        Json(created),
    ))
}

// Overwrites both mutable fields from the body: an omitted name becomes
// null. There is no partial-update path.
async fn update_task<S: TaskStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i32>,
    Json(input): Json<Task>,
) -> Result<StatusCode, ApiError> {
    let mut task = store.find_by_id(id).await?.ok_or(ApiError::TaskNotFound)?;
    task.name = input.name;
    task.is_done = input.is_done;
    store.update(&task).await?;
    #[cfg(feature = "tracing")]
    debug!(id = task.id, "Task updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_task<S: TaskStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, ApiError> {
    let task = store.find_by_id(id).await?.ok_or(ApiError::TaskNotFound)?;
    store.delete(&task).await?;
    #[cfg(feature = "tracing")]
    debug!(id = task.id, "Task deleted");
    Ok(Json(task))
}
