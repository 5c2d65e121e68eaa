use crate::error::NewsletterError;
use crate::store::NewsletterStore;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::debug;

/// Handler for GET /api/newsletter-data
pub async fn newsletter_data_handler(
    State(store): State<Arc<NewsletterStore>>,
) -> Result<impl IntoResponse, NewsletterError> {
    let snapshot = store.current();
    let body = serde_json::to_vec(&snapshot.newsletter)?;
    debug!(
        generation = snapshot.generation,
        body_size = body.len(),
        "Serving newsletter data"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    ))
}
