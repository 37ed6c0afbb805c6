use super::clock::{Clock, clamp_position};
use super::player::retain_current;
use super::sink::{SourceError, create_sink_at, probe_duration};
use crate::playback::MediaEvent;
use std::path::Path;
use std::time::Duration;

#[test]
fn stale_events_from_replaced_sources_are_dropped() {
    let tagged = vec![
        (1, MediaEvent::Ended),
        (2, MediaEvent::DurationKnown(Duration::from_secs(9))),
        (1, MediaEvent::TimeUpdate(Duration::from_secs(3))),
        (2, MediaEvent::TimeUpdate(Duration::from_secs(1))),
    ];
    assert_eq!(
        retain_current(2, tagged),
        vec![
            MediaEvent::DurationKnown(Duration::from_secs(9)),
            MediaEvent::TimeUpdate(Duration::from_secs(1)),
        ]
    );
}

#[test]
fn clock_holds_position_while_paused() {
    let mut clock = Clock::default();
    assert_eq!(clock.elapsed(), Duration::ZERO);
    assert!(!clock.is_running());

    clock.reset(Duration::from_secs(5));
    assert_eq!(clock.elapsed(), Duration::from_secs(5));

    clock.resume();
    assert!(clock.is_running());
    assert!(clock.elapsed() >= Duration::from_secs(5));

    clock.pause();
    let frozen = clock.elapsed();
    assert!(!clock.is_running());
    assert_eq!(clock.elapsed(), frozen);
}

#[test]
fn clamp_position_respects_known_duration() {
    let d = Some(Duration::from_secs(10));
    assert_eq!(clamp_position(Duration::from_secs(12), d), Duration::from_secs(10));
    assert_eq!(clamp_position(Duration::from_secs(4), d), Duration::from_secs(4));
    assert_eq!(clamp_position(Duration::from_secs(12), None), Duration::from_secs(12));
}

#[test]
fn sources_fail_without_output_device() {
    let err = create_sink_at(None, Path::new("/nonexistent/song.mp3"), Duration::ZERO).err();
    assert!(matches!(err, Some(SourceError::NoDevice)));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("no audio output device")
    );
}

#[test]
fn probe_duration_of_missing_file_is_unknown() {
    assert_eq!(probe_duration(Path::new("/nonexistent/song.mp3")), None);
}

#[test]
fn probe_duration_of_non_audio_file_is_unknown() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"not audio at all").unwrap();
    assert_eq!(probe_duration(file.path()), None);
}
