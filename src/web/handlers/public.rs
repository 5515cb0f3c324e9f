use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use askama::Template;

use crate::web::helpers::{current_user_id, render};
use crate::web::templates::{LandingTemplate, NotFoundTemplate};

#[get("/")]
pub async fn landing(req: HttpRequest) -> impl Responder {
    render(LandingTemplate {
        logged_in: current_user_id(&req).is_some(),
    })
}

/// Default service for unmatched routes.
pub async fn not_found() -> HttpResponse {
    match NotFoundTemplate.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing);
}
