use actix_web::{HttpRequest, Responder, get, post, web};

use briefshelf::db;

use crate::web::helpers::{current_user, redirect_to, render, require_user};
use crate::web::state::AppState;
use crate::web::templates::{LibraryTemplate, SaveButtonTemplate};

#[get("/library")]
pub async fn library(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let records = match db::list_saved(&state.pool, uid).await {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load library: {}", e);
            Vec::new()
        }
    };

    render(LibraryTemplate {
        logged_in: true,
        active: "library",
        records,
    })
}

/// Add/remove toggle behind the save button. Requires a session; the
/// htmx request of a signed-out user is answered with a login
/// redirect instead of a state change.
#[post("/library/toggle/{id}")]
pub async fn toggle_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    // Snapshot the current book state into the saved record.
    let book = match state.book_api.get_book(&id).await {
        Ok(book) => book,
        Err(e) => {
            log::warn!("toggle {}: fetch failed: {}", id, e);
            return redirect_to(&req, &format!("/book/{}", id));
        }
    };

    let saved = match db::toggle_saved(&state.pool, user.id, &book).await {
        Ok(saved) => saved,
        Err(e) => {
            log::error!("Failed to toggle saved book: {}", e);
            return redirect_to(&req, &format!("/book/{}", id));
        }
    };

    render(SaveButtonTemplate {
        book_id: book.id,
        saved,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(library).service(toggle_save);
}
