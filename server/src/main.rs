use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{Config, PgTodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server::init_tracing();

    let config = Config::from_env()?;

    let store = PgTodoStore::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to database")?;
    tracing::info!("connected to database");

    store.migrate().await.context("failed to run migrations")?;
    tracing::info!("migrations applied");

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    todo_server::run(listener, store).await?;
    Ok(())
}
