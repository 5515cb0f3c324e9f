use actix_web::{HttpRequest, Responder, get, web};

use briefshelf::db;
use briefshelf::models::{FONT_PRESETS, clamp_font_index, font_px_for};
use briefshelf::services::access::{Gate, gate};
use briefshelf::services::{audio, durations, reader};

use crate::web::helpers::{current_user, redirect_to, render};
use crate::web::state::AppState;
use crate::web::templates::{LoadErrorTemplate, PlayerTemplate};

/// The reading/listening page. Gated: no session goes to login,
/// a non-premium session on a premium title goes to plan selection.
#[get("/player/{id}")]
pub async fn player(
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
            log::warn!("player {}: fetch failed: {}", id, e);
            return render(LoadErrorTemplate {
                logged_in,
                active: "",
                message: e.display_inline(),
            });
        }
    };

    match gate(&book, user.as_ref()) {
        Gate::Login => return redirect_to(&req, "/login"),
        Gate::ChoosePlan => return redirect_to(&req, "/choose-plan"),
        Gate::Proceed => {}
    }

    let user = user.expect("gate admits signed-in users only");

    let prefs = db::get_preferences(&state.pool, user.id)
        .await
        .unwrap_or_else(|e| {
            log::error!("Failed to load preferences: {}", e);
            None
        });

    let paragraphs = reader::segment_summary(&book.summary);
    let audio_url = audio::resolve_audio(&book);
    let duration = durations::display_duration(&book);
    let font_px = font_px_for(prefs.as_ref());
    let font_index = clamp_font_index(prefs.as_ref().map(|p| p.font_index as i64).unwrap_or(0));

    render(PlayerTemplate {
        logged_in: true,
        active: "",
        book,
        paragraphs,
        audio_url,
        font_px,
        font_index,
        presets: FONT_PRESETS.to_vec(),
        duration,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(player);
}
