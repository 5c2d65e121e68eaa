use crate::handler::api::newsletter_data_handler;
use crate::handler::health::health_handler;
use crate::handler::not_found_handler;
use crate::handler::page::page_handler;
use crate::store::NewsletterStore;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the HTTP router: newsletter page, JSON data, static assets and health.
///
/// Assets are served from `{static_dir}/js` and `{static_dir}/img`. Paths with
/// `..` or other non-normal components are answered with 404.
pub fn build_router(store: Arc<NewsletterStore>, static_dir: &Path) -> Router {
    let health_router = Router::new().route("/health", get(health_handler));

    let newsletter_router = Router::new()
        .route("/", get(page_handler))
        .route("/api/newsletter-data", get(newsletter_data_handler))
        .with_state(store);

    let asset_router = Router::new()
        .nest_service("/js", asset_dir(static_dir, "js"))
        .nest_service("/img", asset_dir(static_dir, "img"));

    Router::new()
        .merge(health_router)
        .merge(newsletter_router)
        .merge(asset_router)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

fn asset_dir(static_dir: &Path, name: &str) -> ServeDir {
    ServeDir::new(static_dir.join(name)).append_index_html_on_directories(false)
}
