mod common;

#[cfg(test)]
pub mod book_tests {
    use super::common::*;

    use briefshelf::models::Book;

    #[test]
    fn test_rating_display_pads_whole_numbers() {
        let book = Book {
            average_rating: 4.0,
            ..make_book("b1", "Title", "Author")
        };

        assert_eq!(book.rating_display(), "4.0");
    }

    #[test]
    fn test_rating_display_rounds_to_one_decimal() {
        let book = Book {
            average_rating: 4.25,
            ..make_book("b1", "Title", "Author")
        };

        assert_eq!(book.rating_display(), "4.2");

        let book = Book {
            average_rating: 3.97,
            ..make_book("b2", "Title", "Author")
        };

        assert_eq!(book.rating_display(), "4.0");
    }

    #[test]
    fn test_book_deserializes_api_camel_case() {
        let json = r#"{
            "id": "5bxl50cz4bt",
            "title": "How to Win Friends and Influence People",
            "author": "Dale Carnegie",
            "subTitle": "The Only Book You Need to Lead You to Success",
            "imageLink": "https://covers.test/5bxl50cz4bt.png",
            "bookDescription": "A classic on relationships.",
            "authorDescription": "Dale Carnegie was a writer and lecturer.",
            "summary": "People respond to warmth.",
            "tags": ["Communication", "Career"],
            "averageRating": 4.2,
            "totalRating": 504,
            "subscriptionRequired": true,
            "audioLink": "https://audio.test/5bxl50cz4bt.mp3",
            "keyIdeas": 10
        }"#;

        let book: Book = serde_json::from_str(json).expect("valid book JSON");

        assert_eq!(book.id, "5bxl50cz4bt");
        assert_eq!(book.author, "Dale Carnegie");
        assert_eq!(
            book.sub_title.as_deref(),
            Some("The Only Book You Need to Lead You to Success")
        );
        assert!(book.subscription_required);
        assert_eq!(book.key_ideas, Some(10));
        assert_eq!(book.duration, None);
    }

    #[test]
    fn test_book_deserializes_with_missing_optional_fields() {
        let json = r#"{"id": "x", "title": "T", "author": "A"}"#;

        let book: Book = serde_json::from_str(json).expect("minimal book JSON");

        assert_eq!(book.average_rating, 0.0);
        assert_eq!(book.tags.len(), 0);
        assert!(!book.subscription_required);
        assert_eq!(book.audio_link, None);
    }
}
