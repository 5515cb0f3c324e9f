use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use briefshelf::db;
use briefshelf::models::User;

pub const SESSION_COOKIE: &str = "bs_uid";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

/// Resolves the session once per request; every page observes auth
/// state through this single path.
pub async fn current_user(pool: &PgPool, req: &HttpRequest) -> Option<User> {
    let uid = current_user_id(req)?;

    match db::get_user_by_id(pool, uid).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Failed to load session user {}: {}", uid, e);
            None
        }
    }
}

/// Gated actions with no session land on the login page instead.
pub fn require_user(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    match current_user_id(req) {
        Some(uid) => Ok(uid),
        None => Err(redirect_to(req, "/login")),
    }
}

/// Redirect that also works from an htmx-issued request.
pub fn redirect_to(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

