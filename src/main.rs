use std::error::Error;

use tokio::{fs, net};
use tracing::info;
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use it_helpdesk::{db, server, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fs::read_to_string("config.toml").await?;
    let config = toml::from_str::<Config>(&config)?;

    let db_client = db::connect(config.storage).await?;
    let app = server::app(&config.http, db_client)?;

    let listener = net::TcpListener::bind(config.http.server.addr).await?;
    info!(addr = %config.http.server.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
