mod common;

#[cfg(test)]
pub mod audio_tests {
    use super::common::*;

    use briefshelf::models::Book;
    use briefshelf::services::audio::{fallback_audio, resolve_audio};
    use briefshelf::services::durations::{display_duration, fallback_duration};

    #[test]
    fn test_resolve_audio_prefers_api_link() {
        let book = Book {
            audio_link: Some("https://audio.test/own.mp3".to_string()),
            ..make_book("5bxl50cz4bt", "How to Win Friends", "Dale Carnegie")
        };

        assert_eq!(resolve_audio(&book).as_deref(), Some("https://audio.test/own.mp3"));
    }

    #[test]
    fn test_resolve_audio_falls_back_by_id() {
        let book = make_book("5bxl50cz4bt", "How to Win Friends", "Dale Carnegie");

        assert_eq!(resolve_audio(&book).as_deref(), fallback_audio("5bxl50cz4bt"));
        assert!(resolve_audio(&book).is_some());
    }

    #[test]
    fn test_resolve_audio_treats_blank_link_as_missing() {
        let book = Book {
            audio_link: Some("   ".to_string()),
            ..make_book("5bxl50cz4bt", "How to Win Friends", "Dale Carnegie")
        };

        assert_eq!(resolve_audio(&book).as_deref(), fallback_audio("5bxl50cz4bt"));
    }

    #[test]
    fn test_resolve_audio_none_for_unknown_title() {
        let book = make_book("no-such-id", "Obscure", "Nobody");

        assert_eq!(resolve_audio(&book), None);
    }

    #[test]
    fn test_fallback_tables_are_keyed_by_id_not_title() {
        // Renaming the title must not affect the lookup.
        let renamed = make_book("5bxl50cz4bt", "A Completely Different Title", "Dale Carnegie");

        assert!(resolve_audio(&renamed).is_some());
        assert!(display_duration(&renamed).is_some());
    }

    #[test]
    fn test_display_duration_prefers_api_value() {
        let book = Book {
            duration: Some("07:12".to_string()),
            ..make_book("5bxl50cz4bt", "How to Win Friends", "Dale Carnegie")
        };

        assert_eq!(display_duration(&book).as_deref(), Some("07:12"));
    }

    #[test]
    fn test_display_duration_falls_back_by_id() {
        let book = make_book("xmnke9qxmb", "The 10X Rule", "Grant Cardone");

        assert_eq!(display_duration(&book).as_deref(), fallback_duration("xmnke9qxmb"));
        assert!(display_duration(&book).is_some());
    }

    #[test]
    fn test_display_duration_none_for_unknown_title() {
        let book = make_book("no-such-id", "Obscure", "Nobody");

        assert_eq!(display_duration(&book), None);
    }
}
