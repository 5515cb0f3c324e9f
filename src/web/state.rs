use sqlx::PgPool;
use std::sync::Arc;

use briefshelf::services::{BookApi, GoogleOauth};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rate_limiter: Arc<RateLimiter>,
    pub book_api: BookApi,
    /// `None` when Google sign-in is unconfigured; the begin route
    /// then answers with the popup-blocked error.
    pub google: Option<GoogleOauth>,
}
