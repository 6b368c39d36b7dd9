// Session coordinator tests: playback modes, volume and the sleep timer.

use instant::Instant;
use soundscape_core::recording::RecordingPlatform;
use soundscape_core::{
    CombinationSelection, Param, PlaybackMode, Session, SessionConfig, SoundCategory,
    SoundscapeError, TimerState, ToggleOutcome,
};
use std::time::Duration;

use SoundCategory::*;

fn session() -> Session<RecordingPlatform> {
    let config = SessionConfig {
        seed: Some(42),
        ..SessionConfig::default()
    };
    Session::new(RecordingPlatform::default(), config).expect("output stage")
}

fn rain_and_forest() -> CombinationSelection {
    SoundCategory::ALL
        .iter()
        .map(|c| (*c, matches!(c, Rain | Forest)))
        .collect()
}

#[test]
fn exclusive_mode_keeps_at_most_one_category() {
    let mut s = session();
    for c in SoundCategory::ALL {
        assert_eq!(s.toggle(c), ToggleOutcome::Started(c));
        assert_eq!(s.active(), vec![c]);
        assert!(s.registry().len() <= 1);
    }
    assert_eq!(s.mode(), PlaybackMode::Exclusive);
}

#[test]
fn toggling_active_category_stops_it() {
    let mut s = session();
    s.toggle(Ocean);
    assert_eq!(s.toggle(Ocean), ToggleOutcome::Stopped(vec![Ocean]));
    assert!(s.registry().is_empty());
    assert!(s.platform().sounding_sources().is_empty());
}

#[test]
fn unknown_id_changes_nothing() {
    let mut s = session();
    s.toggle(Rain);
    assert_eq!(s.toggle_by_id("thunder"), ToggleOutcome::Ignored);
    assert_eq!(s.active(), vec![Rain]);
    assert_eq!(s.toggle_by_id("rain"), ToggleOutcome::Stopped(vec![Rain]));
}

#[test]
fn combination_commit_replaces_current_playback() {
    let mut s = session();
    s.toggle(Heartbeat);
    let started = s.commit_selection(&rain_and_forest()).unwrap();
    assert_eq!(started, vec![Rain, Forest]);
    assert_eq!(s.active(), vec![Rain, Forest]);
    assert!(!s.is_active(Heartbeat));
    assert_eq!(s.mode(), PlaybackMode::Combination);
}

#[test]
fn empty_commit_is_rejected_without_side_effects() {
    let mut s = session();
    s.toggle(Ocean);
    let nodes = s.platform().node_count();
    assert_eq!(
        s.commit_combination(),
        Err(SoundscapeError::EmptySelection)
    );
    assert_eq!(s.active(), vec![Ocean]);
    assert_eq!(s.platform().node_count(), nodes);
    assert_eq!(s.mode(), PlaybackMode::Exclusive);
}

#[test]
fn toggling_a_combined_category_stops_the_whole_combination() {
    let mut s = session();
    s.commit_selection(&rain_and_forest()).unwrap();
    assert_eq!(s.toggle(Forest), ToggleOutcome::Stopped(vec![Rain, Forest]));
    assert!(s.registry().is_empty());
    assert_eq!(s.mode(), PlaybackMode::Exclusive);
}

#[test]
fn starting_a_single_sound_ends_a_combination() {
    let mut s = session();
    s.commit_selection(&rain_and_forest()).unwrap();
    assert_eq!(s.toggle(Lullaby), ToggleOutcome::Started(Lullaby));
    assert_eq!(s.active(), vec![Lullaby]);
    assert_eq!(s.mode(), PlaybackMode::Exclusive);
}

#[test]
fn combination_panel_collects_and_resets_picks() {
    let mut s = session();
    assert!(s.toggle_combination_panel());
    assert!(s.select_for_combination_by_id("rain", true));
    assert!(!s.select_for_combination_by_id("thunder", true));
    s.select_for_combination(Snow, true);
    assert_eq!(s.snapshot(Instant::now()).pending, vec![Rain, Snow]);

    assert_eq!(s.commit_combination().unwrap(), vec![Rain, Snow]);
    let snap = s.snapshot(Instant::now());
    assert!(!snap.combination_panel_open);
    assert!(snap.pending.is_empty());
    assert_eq!(snap.active, vec![Rain, Snow]);
}

#[test]
fn closing_the_panel_cancels_pending_picks() {
    let mut s = session();
    s.set_combination_panel(true);
    s.select_for_combination(White, true);
    s.set_combination_panel(false);
    assert!(s.selection().is_empty());

    s.select_for_combination(Pink, true);
    s.cancel_combination();
    assert!(s.selection().is_empty());
}

#[test]
fn combination_survives_a_failed_member() {
    let mut s = session();
    // Enough allocations for rain's five handles, then nothing for forest.
    s.platform_mut().fail_allocations_after(4);
    let started = s.commit_selection(&rain_and_forest()).unwrap();
    assert_eq!(started, vec![Rain]);
    assert_eq!(s.active(), vec![Rain]);
}

#[test]
fn failed_start_is_reported_and_not_registered() {
    let mut s = session();
    s.platform_mut().fail_allocations_after(0);
    assert_eq!(s.toggle(Lullaby), ToggleOutcome::Failed(Lullaby));
    assert!(s.registry().is_empty());
}

#[test]
fn last_volume_write_wins() {
    let mut s = session();
    s.commit_selection(&rain_and_forest()).unwrap();
    s.set_volume(0.3);
    s.set_volume(0.7);
    let out = *s.engine().output().node();
    assert_eq!(s.platform().param(out, Param::Gain), Some(0.7));
    assert_eq!(s.volume(), 0.7);
    // One bus feeds the physical output, and both graphs feed the bus.
    assert_eq!(s.platform().output_feeds(), vec![out]);
    assert!(s.platform().edges_into(out) >= 2);
}

#[test]
fn volume_is_clamped_and_nan_ignored() {
    let mut s = session();
    s.set_volume(1.5);
    assert_eq!(s.volume(), 1.0);
    s.set_volume(f32::NAN);
    assert_eq!(s.volume(), 1.0);
    s.set_volume(-0.2);
    assert_eq!(s.volume(), 0.0);
}

#[test]
fn timer_expiry_stops_everything_once() {
    let mut s = session();
    let t0 = Instant::now();
    s.toggle(Rain);
    s.arm_timer(1, t0);

    let mut expirations = 0;
    for sec in 0..=90 {
        s.platform_mut().advance(1.0);
        if s.tick(t0 + Duration::from_secs(sec)).timer_expired {
            expirations += 1;
            assert_eq!(sec, 60);
        }
    }
    assert_eq!(expirations, 1);
    assert!(s.registry().is_empty());
    assert_eq!(s.timer().state(), TimerState::Unarmed);
}

#[test]
fn arm_zero_disarms_without_waiting() {
    let mut s = session();
    let t0 = Instant::now();
    s.toggle(Ocean);
    s.arm_timer(15, t0);
    s.arm_timer(0, t0);
    assert_eq!(s.timer().state(), TimerState::Unarmed);
    assert_eq!(s.snapshot(t0).countdown, None);
    assert!(!s.tick(t0 + Duration::from_secs(3600)).timer_expired);
    assert_eq!(s.active(), vec![Ocean]);
}

#[test]
fn rearming_replaces_the_deadline() {
    let mut s = session();
    let t0 = Instant::now();
    s.arm_timer(15, t0);
    s.arm_timer(30, t0);
    assert_eq!(s.timer().deadline(), Some(t0 + Duration::from_secs(30 * 60)));
    assert_eq!(s.snapshot(t0).countdown.as_deref(), Some("30:00"));
    assert_eq!(
        s.snapshot(t0 + Duration::from_secs(90)).countdown.as_deref(),
        Some("28:30")
    );
}

#[test]
fn manual_stop_all_cancels_the_timer() {
    let mut s = session();
    let t0 = Instant::now();
    s.toggle(Brown);
    s.arm_timer(30, t0);
    assert_eq!(s.stop_all(), vec![Brown]);
    assert!(!s.timer().is_armed());
}

#[test]
fn timer_armed_before_choosing_a_sound_still_fires() {
    let mut s = session();
    let t0 = Instant::now();
    s.arm_timer(30, t0);
    assert_eq!(s.toggle(Rain), ToggleOutcome::Started(Rain));
    assert!(s.timer().is_armed());
    assert_eq!(s.timer().deadline(), Some(t0 + Duration::from_secs(30 * 60)));

    assert!(!s.tick(t0 + Duration::from_secs(29 * 60)).timer_expired);
    assert_eq!(s.active(), vec![Rain]);
    assert!(s.tick(t0 + Duration::from_secs(30 * 60)).timer_expired);
    assert!(s.registry().is_empty());
    assert_eq!(s.timer().state(), TimerState::Unarmed);
}

#[test]
fn switching_sounds_and_committing_keep_the_timer() {
    let mut s = session();
    let t0 = Instant::now();
    s.toggle(Ocean);
    s.arm_timer(15, t0);
    s.toggle(Snow);
    assert!(s.timer().is_armed());
    s.commit_selection(&rain_and_forest()).unwrap();
    assert!(s.timer().is_armed());
    // Toggling the combination off stops the sounds, not the countdown.
    s.toggle(Rain);
    assert!(s.registry().is_empty());
    assert_eq!(s.snapshot(t0).countdown.as_deref(), Some("15:00"));
}

#[test]
fn snapshot_reports_presentational_facts() {
    let mut s = session();
    let t0 = Instant::now();
    s.toggle(Snow);
    s.set_volume(0.25);
    s.arm_timer(60, t0);
    let snap = s.snapshot(t0);
    assert_eq!(snap.active, vec![Snow]);
    assert_eq!(snap.volume, 0.25);
    assert_eq!(snap.countdown.as_deref(), Some("1:00:00"));
    assert_eq!(snap.mode, PlaybackMode::Exclusive);
}
