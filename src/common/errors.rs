use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Authentication failures, each with its user-facing message.
///
/// `code()`/`from_code()` round-trip through the `?error=` query
/// parameter so a failed submit can redirect back to the form.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Sign-in was cancelled before it completed")]
    PopupCancelled,

    #[error("Sign-in with Google is not available right now")]
    PopupBlocked,

    #[error("Too many attempts. Please try again later.")]
    RateLimited,

    #[error("Something went wrong. Please try again.")]
    Unknown,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid",
            Self::EmailTaken => "exists",
            Self::WeakPassword => "weak_password",
            Self::InvalidEmail => "invalid_email",
            Self::PopupCancelled => "popup_cancelled",
            Self::PopupBlocked => "popup_blocked",
            Self::RateLimited => "rate_limit",
            Self::Unknown => "internal",
        }
    }

    /// Unmapped codes fall back to the generic message.
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid" => Self::InvalidCredentials,
            "exists" => Self::EmailTaken,
            "weak_password" => Self::WeakPassword,
            "invalid_email" => Self::InvalidEmail,
            "popup_cancelled" => Self::PopupCancelled,
            "popup_blocked" => Self::PopupBlocked,
            "rate_limit" => Self::RateLimited,
            _ => Self::Unknown,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failures of the remote book-data API. Callers surface these as an
/// inline error state on the page, never as a fatal condition.
#[derive(Error, Debug)]
pub enum BookApiError {
    #[error("Could not reach the book service")]
    Network(#[source] reqwest::Error),

    #[error("Book service returned HTTP {0}")]
    Http(u16),
}

impl BookApiError {
    /// Short inline message for page-level error states.
    pub fn display_inline(&self) -> String {
        match self {
            Self::Network(_) => {
                "Error loading content. Check your connection and try again.".to_string()
            }
            Self::Http(status) => format!("Error loading content (HTTP {status})."),
        }
    }
}

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Saved record is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
}
