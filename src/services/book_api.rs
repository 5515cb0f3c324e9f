use std::fmt;
use std::time::Duration;

use crate::common::BookApiError;
use crate::models::Book;

const HTTP_TIMEOUT_SECS: u64 = 10;
const HTTP_USER_AGENT: &str = "Briefshelf/0.1";

/// The three curated book lists the remote API serves.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Category {
    Recommended,
    Suggested,
    Selected,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Recommended, Category::Suggested, Category::Selected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Suggested => "suggested",
            Self::Selected => "selected",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client for the remote book-data API. Each page fetches what it
/// needs per request; there is no retry and no caching layer.
#[derive(Clone)]
pub struct BookApi {
    base_url: String,
    client: reqwest::Client,
}

impl BookApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(HTTP_USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("BOOK_API_BASE_URL")
            .expect("BOOK_API_BASE_URL must be set (base URL of the book-data API)");
        Self::new(base_url)
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, BookApiError> {
        let url = format!("{}/getBook?id={}", self.base_url, urlencoding::encode(id));
        self.fetch_json(&url).await
    }

    pub async fn get_books(&self, category: Category) -> Result<Vec<Book>, BookApiError> {
        let url = format!("{}/getBooks?status={}", self.base_url, category);
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, BookApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(BookApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookApiError::Http(status.as_u16()));
        }

        response.json::<T>().await.map_err(BookApiError::Network)
    }
}
