use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use std::time::Duration;
use uuid::Uuid;

use briefshelf::common::AuthError;
use briefshelf::db;
use briefshelf::models::LoginMethod;
use briefshelf::services::auth::{
    GUEST_EMAIL, PasswordManager, password_is_weak, validate_email,
};

use crate::web::forms::{
    AuthQuery, ForgotPasswordForm, LoginForm, OauthCallbackQuery, RegisterForm, ResetPasswordForm,
};
use crate::web::helpers::{SESSION_COOKIE, render};
use crate::web::state::AppState;
use crate::web::templates::{
    ForgotPasswordTemplate, LoginTemplate, RegisterTemplate, ResetPasswordTemplate,
};

const OAUTH_STATE_COOKIE: &str = "oauth_state";

fn session_cookie(user_id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, user_id.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(7))
        .finish()
}

fn signed_in(user_id: Uuid) -> HttpResponse {
    // Successful login/signup lands on the recommendations page.
    HttpResponse::SeeOther()
        .cookie(session_cookie(user_id))
        .insert_header(("Location", "/for-you"))
        .finish()
}

fn back_with_error(path: &str, error: AuthError) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("{}?error={}", path, error.code())))
        .finish()
}

fn query_error(query: &AuthQuery) -> Option<String> {
    query
        .error
        .as_deref()
        .map(|code| AuthError::from_code(code).message())
}

fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[get("/login")]
pub async fn login_form(state: web::Data<AppState>, query: web::Query<AuthQuery>) -> impl Responder {
    render(LoginTemplate {
        error: query_error(&query),
        google_enabled: state.google.is_some(),
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    if !state.rate_limiter.check_rate_limit(
        &format!("login:{}", client_ip(&req)),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return back_with_error("/login", AuthError::RateLimited);
    }

    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    // Validation runs before any hashing or lookup.
    if email.is_empty() || password.is_empty() {
        return back_with_error("/login", AuthError::InvalidCredentials);
    }

    let user = match db::get_user_by_email(&state.pool, &email).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Database error during login: {}", e);
            return back_with_error("/login", AuthError::Unknown);
        }
    };

    // Constant-time shape: unknown emails still pay for a verify.
    let stored_hash = user.as_ref().map(|u| u.password_hash.as_str());
    if !PasswordManager::verify_login(&password, stored_hash) {
        return back_with_error("/login", AuthError::InvalidCredentials);
    }

    let user = user.expect("verified user exists");
    signed_in(user.id)
}

#[get("/register")]
pub async fn register_form(query: web::Query<AuthQuery>) -> impl Responder {
    render(RegisterTemplate {
        error: query_error(&query),
    })
}

#[post("/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    if !validate_email(&email) {
        return back_with_error("/register", AuthError::InvalidEmail);
    }
    if password_is_weak(&password) {
        return back_with_error("/register", AuthError::WeakPassword);
    }

    if !state.rate_limiter.check_rate_limit(
        &format!("register:{}", client_ip(&req)),
        3,                         // 3 attempts
        Duration::from_secs(3600), // per hour
    ) {
        return back_with_error("/register", AuthError::RateLimited);
    }

    let password_hash = match PasswordManager::hash_password(&password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return back_with_error("/register", AuthError::Unknown);
        }
    };

    let user = match db::create_user(&state.pool, &email, &password_hash, LoginMethod::Email).await
    {
        Ok(Some(u)) => u,
        Ok(None) => {
            return back_with_error("/register", AuthError::EmailTaken);
        }
        Err(e) => {
            log::error!("Database error during registration: {}", e);
            return back_with_error("/register", AuthError::Unknown);
        }
    };

    signed_in(user.id)
}

/// Guest access signs into the shared guest account seeded by the
/// migrations; no credentials cross the wire.
#[post("/guest")]
pub async fn guest_login(state: web::Data<AppState>) -> impl Responder {
    match db::get_user_by_email(&state.pool, GUEST_EMAIL).await {
        Ok(Some(user)) => signed_in(user.id),
        Ok(None) => {
            log::error!("Guest account {} is missing", GUEST_EMAIL);
            back_with_error("/login", AuthError::Unknown)
        }
        Err(e) => {
            log::error!("Database error during guest login: {}", e);
            back_with_error("/login", AuthError::Unknown)
        }
    }
}

#[post("/logout")]
pub async fn logout() -> impl Responder {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", "/"))
        .finish()
}

#[get("/forgot-password")]
pub async fn forgot_password_form(query: web::Query<AuthQuery>) -> impl Responder {
    render(ForgotPasswordTemplate {
        error: query_error(&query),
        sent: query.sent.is_some(),
    })
}

#[post("/forgot-password")]
pub async fn forgot_password_submit(
    state: web::Data<AppState>,
    form: web::Form<ForgotPasswordForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();

    if !validate_email(&email) {
        return back_with_error("/forgot-password", AuthError::InvalidEmail);
    }

    // The response does not reveal whether the account exists.
    match db::get_user_by_email(&state.pool, &email).await {
        Ok(Some(user)) if user.login_method == LoginMethod::Email => {
            match db::create_password_reset(&state.pool, user.id).await {
                Ok(token) => {
                    // Mail dispatch is external; the link is logged for
                    // the operator to deliver.
                    log::info!("Password reset for {}: /reset-password/{}", email, token);
                }
                Err(e) => {
                    log::error!("Failed to create password reset: {}", e);
                }
            }
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Database error during password reset request: {}", e);
        }
    }

    HttpResponse::SeeOther()
        .insert_header(("Location", "/forgot-password?sent=1"))
        .finish()
}

#[get("/reset-password/{token}")]
pub async fn reset_password_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    let raw = path.into_inner();
    let token = match Uuid::parse_str(&raw) {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/forgot-password"))
                .finish();
        }
    };

    match db::reset_token_exists(&state.pool, token).await {
        Ok(true) => render(ResetPasswordTemplate {
            token: token.to_string(),
            error: query_error(&query),
        }),
        Ok(false) => HttpResponse::SeeOther()
            .insert_header(("Location", "/forgot-password"))
            .finish(),
        Err(e) => {
            log::error!("Database error loading reset token: {}", e);
            back_with_error("/forgot-password", AuthError::Unknown)
        }
    }
}

#[post("/reset-password/{token}")]
pub async fn reset_password_submit(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ResetPasswordForm>,
) -> impl Responder {
    let raw = path.into_inner();
    let token = match Uuid::parse_str(&raw) {
        Ok(t) => t,
        Err(_) => {
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/forgot-password"))
                .finish();
        }
    };

    if password_is_weak(&form.password) {
        return back_with_error(&format!("/reset-password/{}", token), AuthError::WeakPassword);
    }

    let user_id = match db::consume_password_reset(&state.pool, token).await {
        Ok(Some(uid)) => uid,
        Ok(None) => {
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/forgot-password"))
                .finish();
        }
        Err(e) => {
            log::error!("Database error consuming reset token: {}", e);
            return back_with_error("/forgot-password", AuthError::Unknown);
        }
    };

    let password_hash = match PasswordManager::hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return back_with_error("/forgot-password", AuthError::Unknown);
        }
    };

    if let Err(e) = db::set_user_password(&state.pool, user_id, &password_hash).await {
        log::error!("Failed to update password: {}", e);
        return back_with_error("/forgot-password", AuthError::Unknown);
    }

    HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish()
}

#[get("/auth/google")]
pub async fn google_begin(state: web::Data<AppState>) -> impl Responder {
    let Some(google) = state.google.as_ref() else {
        return back_with_error("/login", AuthError::PopupBlocked);
    };

    let oauth_state = Uuid::new_v4().to_string();
    let cookie = Cookie::build(OAUTH_STATE_COOKIE, oauth_state.clone())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::minutes(10))
        .finish();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", google.authorize_url(&oauth_state)))
        .finish()
}

#[get("/auth/google/callback")]
pub async fn google_callback(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<OauthCallbackQuery>,
) -> impl Responder {
    let Some(google) = state.google.as_ref() else {
        return back_with_error("/login", AuthError::PopupBlocked);
    };

    // The consent screen was dismissed.
    if let Some(err) = query.error.as_deref() {
        let mapped = if err == "access_denied" {
            AuthError::PopupCancelled
        } else {
            log::error!("Google callback error: {}", err);
            AuthError::Unknown
        };
        return back_with_error("/login", mapped);
    }

    let state_matches = match (req.cookie(OAUTH_STATE_COOKIE), query.state.as_deref()) {
        (Some(cookie), Some(sent)) => cookie.value() == sent,
        _ => false,
    };
    if !state_matches {
        log::error!("Google callback state mismatch");
        return back_with_error("/login", AuthError::Unknown);
    }

    let Some(code) = query.code.as_deref() else {
        return back_with_error("/login", AuthError::Unknown);
    };

    let email = match google.exchange_code(code).await {
        Ok(email) => email,
        Err(e) => return back_with_error("/login", e),
    };

    match db::get_or_create_google_user(&state.pool, &email).await {
        Ok(user) => signed_in(user.id),
        Err(e) => {
            log::error!("Database error during Google sign-in: {}", e);
            back_with_error("/login", AuthError::Unknown)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(guest_login)
        .service(logout)
        .service(forgot_password_form)
        .service(forgot_password_submit)
        .service(reset_password_form)
        .service(reset_password_submit)
        .service(google_begin)
        .service(google_callback);
}
