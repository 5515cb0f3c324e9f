use actix_web::{HttpRequest, Responder, get, web};

use briefshelf::db;
use briefshelf::services::book_api::Category;
use briefshelf::services::{audio, durations};

use crate::web::helpers::{current_user, current_user_id, render};
use crate::web::state::AppState;
use crate::web::templates::{BookDetailTemplate, ForYouTemplate, LoadErrorTemplate};

#[get("/for-you")]
pub async fn for_you(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let logged_in = current_user_id(&req).is_some();

    // Each list is fetched per request; a failed list degrades to an
    // inline error while the rest of the page renders.
    let selected = state.book_api.get_books(Category::Selected).await;
    let recommended = state.book_api.get_books(Category::Recommended).await;
    let suggested = state.book_api.get_books(Category::Suggested).await;

    let mut error = None;
    for result in [&selected, &recommended, &suggested] {
        if let Err(e) = result {
            log::warn!("for-you: book list fetch failed: {}", e);
            error = Some(e.display_inline());
        }
    }

    render(ForYouTemplate {
        logged_in,
        active: "for-you",
        selected: selected.ok().and_then(|books| books.into_iter().next()),
        recommended: recommended.unwrap_or_default(),
        suggested: suggested.unwrap_or_default(),
        error,
    })
}

#[get("/book/{id}")]
pub async fn book_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let user = current_user(&state.pool, &req).await;
    let logged_in = user.is_some();

    let book = match state.book_api.get_book(&id).await {
        Ok(book) => book,
        Err(e) => {
            log::warn!("book {}: fetch failed: {}", id, e);
            return render(LoadErrorTemplate {
                logged_in,
                active: "",
                message: e.display_inline(),
            });
        }
    };

    let saved = match user {
        Some(ref user) => db::is_saved(&state.pool, user.id, &book.id)
            .await
            .unwrap_or_else(|e| {
                log::error!("Failed to check saved state: {}", e);
                false
            }),
        None => false,
    };

    let duration = durations::display_duration(&book);
    let has_audio = audio::resolve_audio(&book).is_some();

    render(BookDetailTemplate {
        logged_in,
        active: "",
        book,
        saved,
        duration,
        has_audio,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(for_you).service(book_detail);
}
