use actix_web::{HttpResponse, Responder, get, web};
use std::time::Duration;

use briefshelf::services::search;

use crate::web::forms::SearchQuery;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::SearchResultsTemplate;

// Fixed pacing floor on top of the client-side debounce, preserved
// from the observed behavior.
const LATENCY_FLOOR: Duration = Duration::from_millis(500);

/// Dropdown fragment behind the shell's search box. The input
/// debounces 300 ms and supersedes in-flight requests; the newest
/// response is the only one htmx will swap in.
#[get("/search")]
pub async fn search_books(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let q = query.q.as_deref().unwrap_or("").trim().to_string();

    if q.is_empty() {
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body("");
    }

    tokio::time::sleep(LATENCY_FLOOR).await;

    let results = search::search(&state.book_api, &q).await;

    render(SearchResultsTemplate {
        empty_message: search::empty_state_message(&q),
        results,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_books);
}
