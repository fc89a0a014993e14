#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app().expect("leptos app init failed");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "pagebuilder listening");
    axum::serve(listener, app).await.expect("server failed");
}
