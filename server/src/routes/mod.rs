//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host holds no page state. It renders the builder through Leptos SSR,
//! serves the hydration bundle from `/pkg`, and answers `/healthz` for
//! process supervisors.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use pagebuilder_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos site options.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(health::healthz))
}

/// Leptos SSR frontend plus static assets and health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
