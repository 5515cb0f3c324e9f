pub mod account;
pub mod auth;
pub mod books;
pub mod library;
pub mod plans;
pub mod public;
pub mod reader;
pub mod search;

use actix_web::web;

/// Configure all routes. The 404 fallback is registered separately as
/// the app's default service so it cannot shadow a real route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    books::configure(cfg);
    reader::configure(cfg);
    library::configure(cfg);
    account::configure(cfg);
    plans::configure(cfg);
    search::configure(cfg);
}
