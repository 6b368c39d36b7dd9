//! Pure parsing and formatting for form controls; no DOM access here.

use crate::constants::VOLUME_SLIDER_MAX;

/// Slider value ("0".."100") to a linear level. Garbage yields `None`.
pub fn slider_to_volume(raw: &str) -> Option<f32> {
    let v: f32 = raw.trim().parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some((v / VOLUME_SLIDER_MAX).clamp(0.0, 1.0))
}

pub fn volume_to_slider(volume: f32) -> String {
    format!("{:.0}", volume.clamp(0.0, 1.0) * VOLUME_SLIDER_MAX)
}

pub fn volume_label(volume: f32) -> String {
    format!("{}%", volume_to_slider(volume))
}

/// Timer select value to minutes. Empty and "off" mean 0 (disarm).
pub fn parse_timer_minutes(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("off") {
        return Some(0);
    }
    raw.parse().ok()
}

pub fn now_playing_text(labels: &[&str]) -> String {
    if labels.is_empty() {
        "Nothing playing".to_string()
    } else {
        format!("Now playing: {}", labels.join(" + "))
    }
}
