use anyhow::Result;
use db::DBService;
use server::{app, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init("info,sqlx=warn");

    let config = Config::from_env();
    let db = DBService::new(&config.db_path).await?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, db = %config.db_path.display(), "covalent server listening");
    axum::serve(listener, app(db)).await?;

    Ok(())
}
