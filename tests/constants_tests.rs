// Host-side checks that the page contract is self-consistent.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use soundscape_core::SoundCategory;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        VOLUME_ID,
        VOLUME_VALUE_ID,
        TIMER_ID,
        TIMER_DISPLAY_ID,
        NOW_PLAYING_ID,
        COMBINE_PANEL_ID,
        COMBINE_TOGGLE_ID,
        COMBINE_PLAY_ID,
        COMBINE_CANCEL_ID,
        STATUS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(SOUND_ATTR, COMBINE_ATTR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tick_is_faster_than_the_shortest_scheduler() {
    let shortest = soundscape_core::constants::DROPLET_INTERVAL_SEC;
    assert!(TICK_INTERVAL_MS > 0);
    assert!((TICK_INTERVAL_MS as f64) / 1000.0 < shortest);
    assert!(STATUS_CLEAR_MS > TICK_INTERVAL_MS);
}

#[test]
fn tile_ids_round_trip_through_categories() {
    for c in SoundCategory::ALL {
        assert_eq!(c.id().parse::<SoundCategory>(), Ok(c));
    }
}
