#[cfg(test)]
pub mod player_tests {
    use briefshelf::services::player::{PlaybackState, SKIP_SECONDS, TransportState};

    fn ready_player(duration: f64) -> PlaybackState {
        let mut player = PlaybackState::with_source();
        player.metadata_loaded(duration);
        player
    }

    #[test]
    fn test_new_player_has_no_source() {
        let player = PlaybackState::no_source();

        assert_eq!(player.state(), TransportState::NoSource);
        assert!(!player.is_ready());
    }

    #[test]
    fn test_source_assignment_enters_loading() {
        let player = PlaybackState::with_source();

        assert_eq!(player.state(), TransportState::SourceLoading);
        assert!(!player.is_ready());
    }

    #[test]
    fn test_metadata_loaded_enters_ready_paused() {
        let player = ready_player(300.0);

        assert!(player.is_ready());
        assert!(!player.is_playing());
        assert_eq!(player.duration(), 300.0);
    }

    #[test]
    fn test_metadata_loaded_is_noop_without_source() {
        let mut player = PlaybackState::no_source();
        player.metadata_loaded(300.0);

        assert_eq!(player.state(), TransportState::NoSource);
        assert_eq!(player.duration(), 0.0);
    }

    #[test]
    fn test_toggle_play_flips_between_playing_and_paused() {
        let mut player = ready_player(300.0);

        player.toggle_play();
        assert!(player.is_playing());

        player.toggle_play();
        assert!(!player.is_playing());
        assert!(player.is_ready());
    }

    #[test]
    fn test_toggle_play_is_noop_while_loading() {
        let mut player = PlaybackState::with_source();
        player.toggle_play();

        assert_eq!(player.state(), TransportState::SourceLoading);
    }

    #[test]
    fn test_seek_clamps_beyond_duration_to_duration() {
        let mut player = ready_player(300.0);
        player.seek(400.0);

        assert_eq!(player.current_time(), 300.0);
    }

    #[test]
    fn test_seek_clamps_negative_to_zero() {
        let mut player = ready_player(300.0);
        player.seek(-5.0);

        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn test_seek_is_noop_before_ready() {
        let mut player = PlaybackState::with_source();
        player.seek(10.0);

        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn test_rewind_subtracts_skip_and_clamps_at_start() {
        let mut player = ready_player(300.0);
        player.seek(15.0);
        player.rewind();

        assert_eq!(player.current_time(), 15.0 - SKIP_SECONDS);

        player.rewind();
        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn test_forward_adds_skip_and_clamps_at_end() {
        let mut player = ready_player(300.0);
        player.seek(295.0);
        player.forward();

        assert_eq!(player.current_time(), 300.0);
    }

    #[test]
    fn test_seek_fraction_maps_bar_clicks() {
        let mut player = ready_player(200.0);
        player.seek_fraction(0.5);

        assert_eq!(player.current_time(), 100.0);

        player.seek_fraction(1.5);
        assert_eq!(player.current_time(), 200.0);

        player.seek_fraction(-0.25);
        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn test_ended_returns_to_paused_at_end_position() {
        let mut player = ready_player(120.0);
        player.toggle_play();
        player.seek(100.0);
        player.ended();

        assert!(!player.is_playing());
        assert!(player.is_ready());
        assert_eq!(player.current_time(), 120.0);
    }

    #[test]
    fn test_set_source_resets_to_loading() {
        let mut player = ready_player(120.0);
        player.toggle_play();
        player.set_source();

        assert_eq!(player.state(), TransportState::SourceLoading);
        assert_eq!(player.current_time(), 0.0);
        assert_eq!(player.duration(), 0.0);
    }

    #[test]
    fn test_progress_fraction_is_zero_without_duration() {
        let player = PlaybackState::with_source();

        assert_eq!(player.progress_fraction(), 0.0);
    }

    #[test]
    fn test_progress_fraction_reflects_position() {
        let mut player = ready_player(200.0);
        player.seek(50.0);

        assert_eq!(player.progress_fraction(), 0.25);
    }
}
