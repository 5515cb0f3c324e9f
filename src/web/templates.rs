use askama::Template;

use briefshelf::models::{Book, SavedBookRecord};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub google_enabled: bool,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub error: Option<String>,
    pub sent: bool,
}

#[derive(Template)]
#[template(path = "auth/reset_password.html")]
pub struct ResetPasswordTemplate {
    pub token: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "for_you.html")]
pub struct ForYouTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub selected: Option<Book>,
    pub recommended: Vec<Book>,
    pub suggested: Vec<Book>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "book.html")]
pub struct BookDetailTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub book: Book,
    pub saved: bool,
    pub duration: Option<String>,
    pub has_audio: bool,
}

#[derive(Template)]
#[template(path = "player.html")]
pub struct PlayerTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub book: Book,
    pub paragraphs: Vec<String>,
    pub audio_url: Option<String>,
    pub font_px: u16,
    pub font_index: usize,
    pub presets: Vec<u16>,
    pub duration: Option<String>,
}

#[derive(Template)]
#[template(path = "library.html")]
pub struct LibraryTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub records: Vec<SavedBookRecord>,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub email: String,
    pub login_method: String,
    pub plan: String,
    pub premium: bool,
    pub font_index: usize,
    pub presets: Vec<u16>,
    pub dark_mode: bool,
}

#[derive(Template)]
#[template(path = "choose_plan.html")]
pub struct ChoosePlanTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub current_plan: Option<String>,
    pub is_guest: bool,
}

#[derive(Template)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub plan: String,
    pub price: &'static str,
}

/// Inline error state for a page whose book fetch failed; the shell
/// stays interactive around it.
#[derive(Template)]
#[template(path = "load_error.html")]
pub struct LoadErrorTemplate {
    pub logged_in: bool,
    pub active: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "fragments/search_results.html")]
pub struct SearchResultsTemplate {
    pub results: Vec<Book>,
    pub empty_message: String,
}

#[derive(Template)]
#[template(path = "fragments/save_button.html")]
pub struct SaveButtonTemplate {
    pub book_id: String,
    pub saved: bool,
}
