//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every app route is rendered by Leptos SSR and hydrated in the browser.
//! The compiled WASM/JS/CSS bundle is served from `<site_root>/pkg`. The
//! server holds no auth state; the browser talks to the auth provider and
//! the GENIA API directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Leptos options for `config`, starting from whatever the environment provides.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut options = conf.leptos_options;
    options.site_root = Arc::from(config.site_root.as_str());
    options.site_addr = config.addr();
    if options.output_name.is_empty() {
        options.output_name = Arc::from("genia");
    }
    Ok(options)
}

/// Full application router: health probe, static bundle, SSR pages.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(genia::app::App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || genia::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(genia::app::shell))
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
