use std::sync::Arc;
use tarefas_api::adapters::HttpServer;
use tarefas_api::storage::memory::MemoryStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let store = Arc::new(MemoryStorage::new());
    let server = HttpServer::new(store);
    server.serve("0.0.0.0:3000").await?;
    Ok(())
}
