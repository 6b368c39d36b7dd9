// Host-side tests for pure form-control helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/input.rs"]
mod input;

use input::*;

#[test]
fn slider_maps_to_unit_volume() {
    assert_eq!(slider_to_volume("0"), Some(0.0));
    assert_eq!(slider_to_volume("50"), Some(0.5));
    assert_eq!(slider_to_volume(" 100 "), Some(1.0));
}

#[test]
fn slider_out_of_range_is_clamped() {
    assert_eq!(slider_to_volume("150"), Some(1.0));
    assert_eq!(slider_to_volume("-5"), Some(0.0));
}

#[test]
fn slider_garbage_is_rejected() {
    assert_eq!(slider_to_volume(""), None);
    assert_eq!(slider_to_volume("loud"), None);
    assert_eq!(slider_to_volume("NaN"), None);
    assert_eq!(slider_to_volume("inf"), None);
}

#[test]
fn volume_label_is_a_whole_percentage() {
    assert_eq!(volume_label(0.5), "50%");
    assert_eq!(volume_label(0.333), "33%");
    assert_eq!(volume_to_slider(1.0), "100");
}

#[test]
fn timer_values_parse_to_minutes() {
    assert_eq!(parse_timer_minutes("15"), Some(15));
    assert_eq!(parse_timer_minutes("0"), Some(0));
    assert_eq!(parse_timer_minutes(""), Some(0));
    assert_eq!(parse_timer_minutes("Off"), Some(0));
    assert_eq!(parse_timer_minutes("-1"), None);
    assert_eq!(parse_timer_minutes("soon"), None);
}

#[test]
fn now_playing_joins_labels() {
    assert_eq!(now_playing_text(&[]), "Nothing playing");
    assert_eq!(now_playing_text(&["Rain"]), "Now playing: Rain");
    assert_eq!(
        now_playing_text(&["Rain", "Forest"]),
        "Now playing: Rain + Forest"
    );
}
