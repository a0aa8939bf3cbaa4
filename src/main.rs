mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env is normal outside development.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let host = HostConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = host.listen_addr(leptos_options.site_addr);

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "labsite listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
