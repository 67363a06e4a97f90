mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let options = routes::leptos_options(&config).expect("leptos configuration");
    let app = routes::app(options);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_root = %config.site_root, "genia listening");
    axum::serve(listener, app).await.expect("server failed");
}
