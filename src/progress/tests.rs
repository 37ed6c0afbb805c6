use super::*;

#[test]
fn format_time_matches_player_labels() {
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(7.0), "0:07");
    assert_eq!(format_time(7.9), "0:07");
    assert_eq!(format_time(600.0), "10:00");
    assert_eq!(format_time(-3.0), "0:00");
}

#[test]
fn pointer_fraction_is_clamped() {
    assert_eq!(Pointer::new(50.0, 100.0).fraction(), 0.5);
    assert_eq!(Pointer::new(150.0, 100.0).fraction(), 1.0);
    assert_eq!(Pointer::new(-5.0, 100.0).fraction(), 0.0);
    assert_eq!(Pointer::new(5.0, 0.0).fraction(), 0.0);
}

#[test]
fn click_at_half_width_seeks_to_half_duration() {
    let mut p = ProgressController::new(0.7);
    p.on_duration_known(Duration::from_secs(200));
    let target = p.seek_target(Pointer::new(40.0, 80.0)).unwrap();
    assert!((target.as_secs_f64() - 100.0).abs() < 1e-6);
}

#[test]
fn seek_before_duration_is_known_is_refused() {
    let p = ProgressController::new(0.7);
    assert_eq!(
        p.seek_target(Pointer::new(10.0, 20.0)),
        Err(PlayerError::MediaPositionUnknown)
    );

    let mut p = ProgressController::new(0.7);
    p.on_duration_known(Duration::ZERO);
    assert_eq!(
        p.seek_target(Pointer::new(10.0, 20.0)),
        Err(PlayerError::MediaPositionUnknown)
    );
}

#[test]
fn time_update_resizes_indicator_and_relabels() {
    let mut p = ProgressController::new(0.7);
    p.on_time_update(Duration::from_secs(10));
    assert_eq!(p.progress_percent(), 0.0);
    assert_eq!(p.elapsed_label(), "0:00");

    p.on_duration_known(Duration::from_secs(120));
    assert_eq!(p.duration_label(), "2:00");
    p.on_time_update(Duration::from_secs(30));
    assert!((p.progress_percent() - 25.0).abs() < 1e-9);
    assert_eq!(p.elapsed_label(), "0:30");
}

#[test]
fn reset_track_forgets_duration() {
    let mut p = ProgressController::new(0.7);
    p.on_duration_known(Duration::from_secs(60));
    p.on_time_update(Duration::from_secs(59));
    p.reset_track();
    assert_eq!(p.duration(), None);
    assert_eq!(p.progress_percent(), 0.0);
    assert_eq!(p.elapsed_label(), "0:00");
    assert_eq!(p.duration_label(), "0:00");
}

#[test]
fn scrub_stays_inside_track() {
    let mut p = ProgressController::new(0.7);
    p.on_duration_known(Duration::from_secs(60));
    p.on_time_update(Duration::from_secs(3));
    assert_eq!(p.scrub_target(-5).unwrap(), Duration::ZERO);
    assert_eq!(p.scrub_target(5).unwrap(), Duration::from_secs(8));
    assert_eq!(p.scrub_target(100).unwrap(), Duration::from_secs(60));
}

#[test]
fn volume_defaults_and_follows_clicks() {
    let mut p = ProgressController::new(0.7);
    assert!((p.volume_percent() - 70.0).abs() < 1e-4);

    assert_eq!(p.volume_from_click(Pointer::new(25.0, 100.0)), 0.25);
    assert!((p.volume_percent() - 25.0).abs() < 1e-9);

    assert_eq!(p.nudge_volume(-1.0), 0.0);
    assert_eq!(p.nudge_volume(0.5), 0.5);
}
