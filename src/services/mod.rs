pub mod access;
pub mod audio;
pub mod auth;
pub mod book_api;
pub mod durations;
pub mod google_oauth;
pub mod player;
pub mod reader;
pub mod search;

pub use access::Gate;
pub use auth::PasswordManager;
pub use book_api::{BookApi, Category};
pub use google_oauth::GoogleOauth;
pub use player::PlaybackState;
