#[cfg(test)]
pub mod reader_tests {
    use briefshelf::models::{FONT_PRESETS, clamp_font_index, font_px_for};
    use briefshelf::services::reader::segment_summary;

    #[test]
    fn test_segment_summary_splits_on_blank_lines() {
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird one.";

        let paragraphs = segment_summary(text);

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "First paragraph here.");
        assert_eq!(paragraphs[2], "Third one.");
    }

    #[test]
    fn test_segment_summary_handles_crlf_blank_lines() {
        let text = "First paragraph.\r\n\r\nSecond paragraph.";

        let paragraphs = segment_summary(text);

        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_segment_summary_groups_nine_sentences_into_three_paragraphs() {
        let text = "One is here. Two is here. Three is here. Four is here. \
                    Five is here. Six is here. Seven is here. Eight is here. Nine is here.";

        let paragraphs = segment_summary(text);

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(
            paragraphs[0],
            "One is here. Two is here. Three is here. Four is here."
        );
        assert_eq!(
            paragraphs[1],
            "Five is here. Six is here. Seven is here. Eight is here."
        );
        assert_eq!(paragraphs[2], "Nine is here.");
    }

    #[test]
    fn test_segment_summary_ignores_periods_before_lowercase() {
        // "e.g. dancing" must not count as a sentence boundary; with a
        // false split the tail paragraph would start elsewhere.
        let text = "Aa is here. Bb is here. Cc is here. Dd likes hobbies, e.g. dancing. Ee is here.";

        let paragraphs = segment_summary(text);

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1], "Ee is here.");
    }

    #[test]
    fn test_segment_summary_returns_empty_for_blank_text() {
        assert!(segment_summary("").is_empty());
        assert!(segment_summary("   \n\n  ").is_empty());
    }

    #[test]
    fn test_segment_summary_keeps_short_text_whole() {
        let paragraphs = segment_summary("A single short summary without structure");

        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn test_clamp_font_index_stays_in_preset_bounds() {
        assert_eq!(clamp_font_index(-3), 0);
        assert_eq!(clamp_font_index(0), 0);
        assert_eq!(clamp_font_index(3), 3);
        assert_eq!(clamp_font_index(99), FONT_PRESETS.len() - 1);
    }

    #[test]
    fn test_font_px_for_defaults_to_first_preset() {
        assert_eq!(font_px_for(None), FONT_PRESETS[0]);
    }
}
