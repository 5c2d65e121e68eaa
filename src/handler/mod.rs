pub mod api;
pub mod health;
pub mod page;

use crate::error::NewsletterError;

/// Fallback for routes that match nothing.
pub async fn not_found_handler() -> NewsletterError {
    NewsletterError::NotFound
}
