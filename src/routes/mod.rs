//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One document route and one static mount. `GET /` returns the viewer page;
//! `/pkg` serves the wasm-pack bundle the page imports. Everything else is a
//! 404. In developer mode every request is traced and responses are marked
//! `no-store` so a browser reload always picks up a rebuilt engine.


use std::path::Path;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::CACHE_CONTROL;
use axum::response::Html;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::page::PKG_PREFIX;
use crate::state::AppState;

/// Build the full router.
pub fn app(state: AppState, pkg_dir: &Path) -> Router {
    let dev = state.dev;
    let mut router = Router::new()
        .route("/", get(index))
        .nest_service(PKG_PREFIX, ServeDir::new(pkg_dir))
        .with_state(state)
        .layer(CompressionLayer::new());

    if dev {
        router = router
            .layer(SetResponseHeaderLayer::overriding(CACHE_CONTROL, HeaderValue::from_static("no-store")))
            .layer(TraceLayer::new_for_http());
    }
    router
}

async fn index(State(state): State<AppState>) -> Html<Bytes> {
    tracing::debug!(bytes = state.page.len(), "serving viewer page");
    Html(state.page)
}
