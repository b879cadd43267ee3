//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR app, its compiled `/pkg` bundle, the static site
//! assets (logo images) and a health probe under a single Axum router.

pub mod health;


use std::path::{Path, PathBuf};

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Directory holding the WASM/JS/CSS bundle inside the site root.
pub fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

/// Leptos SSR app + `/pkg` bundle + static assets + `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg = pkg_dir(&site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(site_root = %site_root.display(), pkg = %pkg.display(), "serving static assets");

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(leptos_router)
        .nest_service(&format!("/{}", leptos_options.site_pkg_dir), ServeDir::new(pkg))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
