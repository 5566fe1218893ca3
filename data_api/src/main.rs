use data_api::flights::PgFlightStore;
use data_api::state::{AppState, Db};
use shared::{init_tracing, initialize_db, load_config};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = load_config()?;
    let pool = initialize_db(&config.postgres).await?;
    let state = AppState {
        db: Db {
            store: Arc::new(PgFlightStore::new(pool.clone())),
        },
    };

    let listen_addr = &config.api.listen_addr;
    info!("starting server at {listen_addr}");
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, data_api::app(state))
        .with_graceful_shutdown(shared::shutdown_listener(None))
        .await?;

    pool.close().await;
    info!(name: "db.closed", "db pool closed, bye");

    Ok(())
}
