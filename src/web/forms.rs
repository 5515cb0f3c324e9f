use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub sent: Option<String>,
}

#[derive(Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordForm {
    pub password: String,
}

#[derive(Deserialize)]
pub struct OauthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct PlanQuery {
    pub plan: Option<String>,
}

#[derive(Deserialize)]
pub struct CheckoutForm {
    pub plan: String,
}

#[derive(Deserialize)]
pub struct FontForm {
    pub size: i64,
    /// Same-site path to return to after the change.
    pub back: Option<String>,
}

#[derive(Deserialize)]
pub struct DarkModeForm {
    pub enabled: Option<String>,
}

impl DarkModeForm {
    /// Checkbox semantics: present means on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.as_deref().is_some_and(|v| v == "on" || v == "true")
    }
}
