use serde::Deserialize;
use std::time::Duration;

use crate::common::AuthError;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Google sign-in over the authorization-code redirect flow. When the
/// client is unconfigured the login page still renders the button; the
/// begin route answers with the popup-blocked error instead.
#[derive(Clone)]
pub struct GoogleOauth {
    client_id: String,
    client_secret: String,
    redirect_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfo {
    email: String,
}

impl GoogleOauth {
    pub fn new(client_id: String, client_secret: String, redirect_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client_id,
            client_secret,
            redirect_url,
            http,
        }
    }

    /// `None` when any of the three settings is missing.
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").ok()?;
        let redirect_url = std::env::var("GOOGLE_REDIRECT_URL").ok()?;

        Some(Self::new(client_id, client_secret, redirect_url))
    }

    /// Consent-screen URL carrying the anti-forgery `state`.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope=openid%20email&state={}",
            AUTH_ENDPOINT,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_url),
            urlencoding::encode(state),
        )
    }

    /// Exchanges the callback code and returns the verified email.
    pub async fn exchange_code(&self, code: &str) -> Result<String, AuthError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
        ];

        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google token exchange failed: {}", e);
                AuthError::Unknown
            })?;

        if !response.status().is_success() {
            log::error!("Google token exchange returned HTTP {}", response.status());
            return Err(AuthError::Unknown);
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            log::error!("Google token response malformed: {}", e);
            AuthError::Unknown
        })?;

        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google userinfo fetch failed: {}", e);
                AuthError::Unknown
            })?;

        if !response.status().is_success() {
            log::error!("Google userinfo returned HTTP {}", response.status());
            return Err(AuthError::Unknown);
        }

        let info: UserInfo = response.json().await.map_err(|e| {
            log::error!("Google userinfo response malformed: {}", e);
            AuthError::Unknown
        })?;

        Ok(info.email)
    }
}
