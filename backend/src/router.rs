use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use crate::config::ServerConfig;

async fn health_check() -> &'static str {
    "OK"
}

/// Serves the built bundle. Paths that are not files get `index.html` so
/// client-side routes like `/projects/<id>` survive a reload.
pub fn build_router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let bundle = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    let site = if config.base_path == "/" {
        Router::new().fallback_service(bundle)
    } else {
        Router::new().nest_service(&config.base_path, bundle)
    };

    Router::new()
        .route("/health", get(health_check))
        .merge(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
