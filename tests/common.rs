use chrono::{DateTime, Utc};
use uuid::Uuid;

use briefshelf::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn make_book(id: &str, title: &str, author: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        sub_title: None,
        image_link: format!("https://covers.test/{id}.png"),
        book_description: "About the book".to_string(),
        author_description: "About the author".to_string(),
        summary: String::new(),
        tags: Vec::new(),
        average_rating: 4.0,
        total_rating: 100,
        subscription_required: false,
        audio_link: None,
        duration: None,
        key_ideas: None,
    }
}

pub fn make_premium_book(id: &str, title: &str, author: &str) -> Book {
    Book {
        subscription_required: true,
        ..make_book(id, title, author)
    }
}

pub fn get_seed_user_free() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "reader@test.com".to_string(),
        password_hash: "hash1".to_string(),
        login_method: LoginMethod::Email,
        plan: Plan::Free,
        created_at: parse_time("2026-01-04 22:15:06+00"),
        edited_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_user_premium() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        email: "premium@test.com".to_string(),
        password_hash: "hash2".to_string(),
        login_method: LoginMethod::Email,
        plan: Plan::Yearly,
        created_at: parse_time("2026-01-05 13:22:56+00"),
        edited_at: parse_time("2026-02-01 09:00:00+00"),
    }
}

pub fn get_seed_user_guest() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-0000000000a1").unwrap(),
        email: "guest@briefshelf.app".to_string(),
        password_hash: "GUEST".to_string(),
        login_method: LoginMethod::Guest,
        plan: Plan::Free,
        created_at: parse_time("2026-01-01 00:00:00+00"),
        edited_at: parse_time("2026-01-01 00:00:00+00"),
    }
}
