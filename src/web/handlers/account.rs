use actix_web::{HttpRequest, Responder, get, post, web};

use briefshelf::db;
use briefshelf::models::{FONT_PRESETS, clamp_font_index, dark_mode_for};

use crate::web::forms::{DarkModeForm, FontForm};
use crate::web::helpers::{current_user, redirect_to, render};
use crate::web::state::AppState;
use crate::web::templates::SettingsTemplate;

#[get("/settings")]
pub async fn settings(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    let prefs = db::get_preferences(&state.pool, user.id)
        .await
        .unwrap_or_else(|e| {
            log::error!("Failed to load preferences: {}", e);
            None
        });

    render(SettingsTemplate {
        logged_in: true,
        active: "settings",
        email: user.email.clone(),
        login_method: user.login_method.to_string(),
        plan: user.plan.to_string(),
        premium: user.is_premium(),
        font_index: clamp_font_index(prefs.as_ref().map(|p| p.font_index as i64).unwrap_or(0)),
        presets: FONT_PRESETS.to_vec(),
        dark_mode: dark_mode_for(prefs.as_ref()),
    })
}

/// Only same-site paths are honored as a return target.
fn back_path(back: Option<&str>) -> String {
    match back {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => "/settings".to_string(),
    }
}

#[post("/settings/font")]
pub async fn set_font(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<FontForm>,
) -> impl Responder {
    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    if let Err(e) = db::set_font_index(&state.pool, user.id, form.size).await {
        log::error!("Failed to store font preference: {}", e);
    }

    redirect_to(&req, &back_path(form.back.as_deref()))
}

#[post("/settings/darkmode")]
pub async fn set_dark_mode(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<DarkModeForm>,
) -> impl Responder {
    let user = match current_user(&state.pool, &req).await {
        Some(user) => user,
        None => return redirect_to(&req, "/login"),
    };

    if let Err(e) = db::set_dark_mode(&state.pool, user.id, form.is_enabled()).await {
        log::error!("Failed to store dark mode preference: {}", e);
    }

    redirect_to(&req, "/settings")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(settings).service(set_font).service(set_dark_mode);
}
