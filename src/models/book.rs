use serde::{Deserialize, Serialize};

/// A book summary as served by the remote book-data API.
///
/// Read-only on this side: the only mutation is snapshotting a copy
/// into a `SavedBookRecord` when the user adds it to their library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub book_description: String,
    #[serde(default)]
    pub author_description: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_rating: i64,
    #[serde(default)]
    pub subscription_required: bool,
    #[serde(default)]
    pub audio_link: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub key_ideas: Option<i64>,
}

impl Book {
    /// Average rating formatted to exactly one decimal place
    /// (4 renders as "4.0").
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }

    pub fn is_premium(&self) -> bool {
        self.subscription_required
    }
}
