use super::*;
use crate::testing::{MediaCall, engine_of};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn new_engine_loads_first_track_without_playing() {
    let engine = engine_of(3, 1);
    assert_eq!(engine.state().current_index, 0);
    assert!(!engine.state().is_playing);
    assert_eq!(
        engine.media().calls,
        vec![MediaCall::Load(PathBuf::from("/nonexistent/song0.mp3"))]
    );
    assert_eq!(engine.now_playing().title, "track 0");
    assert_eq!(engine.transport().play_icon, PlayIcon::Play);
    assert_eq!(engine.track_list().active_index(), Some(0));
}

#[test]
fn missing_cover_falls_back_to_placeholder() {
    let engine = engine_of(2, 1);
    assert_eq!(
        engine.now_playing().cover,
        CoverArt::Placeholder("placeholder.png".to_string())
    );
}

#[test]
fn existing_cover_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let cover = dir.path().join("c.jpg");
    std::fs::write(&cover, b"jpg").unwrap();

    let catalog = crate::catalog::Catalog::new(vec![crate::catalog::Track::new(
        "t",
        "a",
        "/nonexistent/t.mp3",
        cover.to_str().unwrap(),
        "0:10",
    )])
    .unwrap();
    let engine = PlaybackEngine::with_rng(
        catalog,
        crate::testing::FakeMedia::default(),
        crate::testing::placeholders(),
        StdRng::seed_from_u64(0),
    );
    assert_eq!(engine.now_playing().cover, CoverArt::File(cover));
}

#[test]
fn toggle_play_pause_flips_flag_icon_and_media() {
    let mut engine = engine_of(3, 1);

    assert_eq!(engine.toggle_play_pause(), Ok(true));
    assert_eq!(engine.transport().play_icon, PlayIcon::Pause);
    assert_eq!(engine.media().last(), Some(&MediaCall::Play));

    assert_eq!(engine.toggle_play_pause(), Ok(false));
    assert_eq!(engine.transport().play_icon, PlayIcon::Play);
    assert_eq!(engine.media().last(), Some(&MediaCall::Pause));
}

#[test]
fn sequential_advance_cycles_back_to_start_for_every_size() {
    for len in 1..=6 {
        for direction in [Direction::Next, Direction::Previous] {
            let mut engine = engine_of(len, 7);
            let start = engine.state().current_index;
            for _ in 0..len {
                let idx = engine.advance(direction);
                assert!(idx < len);
                assert!(engine.state().is_playing);
                assert_eq!(engine.track_list().active_index(), Some(idx));
            }
            assert_eq!(engine.state().current_index, start);
        }
    }
}

#[test]
fn previous_wraps_to_last_track() {
    let mut engine = engine_of(4, 1);
    assert_eq!(engine.advance(Direction::Previous), 3);
    assert_eq!(engine.advance(Direction::Next), 0);
}

#[test]
fn shuffle_never_repeats_current_track() {
    let mut engine = engine_of(5, 42);
    engine.toggle_shuffle();
    for i in 0..200 {
        let before = engine.state().current_index;
        let direction = if i % 2 == 0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        let after = engine.advance(direction);
        assert_ne!(before, after);
        assert!(after < 5);
    }
}

#[test]
fn shuffle_with_single_track_stays_put() {
    let mut engine = engine_of(1, 3);
    engine.toggle_shuffle();
    assert_eq!(engine.advance(Direction::Next), 0);
}

#[test]
fn random_index_excluding_covers_all_other_indices() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut seen = [false; 4];
    for _ in 0..500 {
        seen[random_index_excluding(&mut rng, 2, 4)] = true;
    }
    assert_eq!(seen, [true, true, false, true]);
}

#[test]
fn toggling_shuffle_twice_restores_flag_and_style() {
    let mut engine = engine_of(3, 1);
    let original = *engine.transport();

    assert!(engine.toggle_shuffle());
    assert_eq!(engine.transport().shuffle, ControlStyle::Active);
    assert_eq!(engine.transport().shuffle.color(), ACCENT);
    assert_eq!(engine.transport().shuffle.background(), Some(ACTIVE_FILL));

    assert!(!engine.toggle_shuffle());
    assert_eq!(*engine.transport(), original);
    assert_eq!(engine.transport().shuffle.background(), None);
}

#[test]
fn shuffle_and_repeat_are_independent() {
    let mut engine = engine_of(3, 1);
    engine.toggle_shuffle();
    engine.toggle_repeat();
    assert!(engine.state().is_shuffle);
    assert!(engine.state().is_repeat);
    engine.toggle_shuffle();
    assert!(engine.state().is_repeat);
    assert_eq!(engine.transport().repeat, ControlStyle::Active);
}

#[test]
fn repeat_restarts_same_track_even_with_shuffle() {
    let mut engine = engine_of(4, 1);
    engine.select_track(2).unwrap();
    engine.toggle_shuffle();
    engine.toggle_repeat();

    assert_eq!(engine.on_track_ended(), TrackEnd::Restarted);
    assert_eq!(engine.state().current_index, 2);
    assert!(engine.state().is_playing);
    let tail = &engine.media().calls[engine.media().calls.len() - 2..];
    assert_eq!(tail, &[MediaCall::Seek(Duration::ZERO), MediaCall::Play]);
}

#[test]
fn track_end_advances_sequentially_and_wraps() {
    let mut engine = engine_of(3, 1);
    engine.select_track(2).unwrap();
    assert_eq!(engine.on_track_ended(), TrackEnd::Advanced(0));
    assert_eq!(engine.track_list().active_index(), Some(0));
    assert!(engine.state().is_playing);
}

#[test]
fn track_end_under_shuffle_picks_another_track() {
    let mut engine = engine_of(3, 5);
    engine.toggle_shuffle();
    match engine.on_track_ended() {
        TrackEnd::Advanced(i) => assert_ne!(i, 0),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn select_track_ignores_modes_and_plays() {
    let mut engine = engine_of(3, 1);
    engine.toggle_shuffle();
    engine.toggle_repeat();
    engine.select_track(1).unwrap();
    assert_eq!(engine.state().current_index, 1);
    assert!(engine.state().is_playing);
    assert_eq!(engine.now_playing().title, "track 1");
    assert_eq!(
        engine.media().loads().last(),
        Some(&PathBuf::from("/nonexistent/song1.mp3"))
    );
}

#[test]
fn select_track_out_of_range_is_rejected_without_side_effects() {
    let mut engine = engine_of(3, 1);
    let calls = engine.media().calls.len();
    assert_eq!(engine.select_track(3), Err(PlayerError::UnknownTrack(3)));
    assert_eq!(engine.state().current_index, 0);
    assert_eq!(engine.media().calls.len(), calls);
}

#[test]
fn load_error_shows_placeholder_and_makes_transport_inert() {
    let mut engine = engine_of(3, 1);
    engine.toggle_play_pause().unwrap();
    engine.on_load_error("no such file");

    assert!(!engine.state().is_playing);
    assert_eq!(engine.transport().play_icon, PlayIcon::Play);
    assert_eq!(engine.now_playing().title, "add your own songs!");
    assert_eq!(engine.now_playing().artist, "put mp3 files in assets folder");
    assert_eq!(
        engine.toggle_play_pause(),
        Err(PlayerError::MediaLoad("no such file".to_string()))
    );
    assert!(engine.seek(Duration::from_secs(1)).is_err());
    assert!(!engine.state().is_playing);

    // Loading another track clears the failure.
    engine.advance(Direction::Next);
    assert!(engine.source_error().is_none());
    assert_eq!(engine.now_playing().title, "track 1");
    assert!(engine.state().is_playing);
}

#[test]
fn set_volume_is_clamped() {
    let mut engine = engine_of(1, 1);
    engine.set_volume(1.7);
    assert_eq!(engine.media().last(), Some(&MediaCall::Volume(1.0)));
}

#[test]
fn step_index_handles_wrap() {
    assert_eq!(step_index(0, 3, Direction::Previous), 2);
    assert_eq!(step_index(2, 3, Direction::Next), 0);
    assert_eq!(step_index(0, 1, Direction::Next), 0);
}
