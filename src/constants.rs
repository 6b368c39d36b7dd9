/// DOM hooks and UI timing for the browser front end.
///
/// The page markup owns the layout; these names are the only contract
/// between it and the wasm module.
// Attributes carrying a category id
pub const SOUND_ATTR: &str = "data-sound"; // sound tiles
pub const COMBINE_ATTR: &str = "data-combine"; // combination checkboxes

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Element ids
pub const VOLUME_ID: &str = "volume";
pub const VOLUME_VALUE_ID: &str = "volume-value";
pub const TIMER_ID: &str = "timer";
pub const TIMER_DISPLAY_ID: &str = "timer-display";
pub const NOW_PLAYING_ID: &str = "now-playing";
pub const COMBINE_PANEL_ID: &str = "combine-panel";
pub const COMBINE_TOGGLE_ID: &str = "combine-toggle";
pub const COMBINE_PLAY_ID: &str = "combine-play";
pub const COMBINE_CANCEL_ID: &str = "combine-cancel";
pub const STATUS_ID: &str = "status-message";

// Scheduler tick; well inside the shortest task interval (0.2 s)
pub const TICK_INTERVAL_MS: i32 = 50;
// How long a status message stays up
pub const STATUS_CLEAR_MS: i32 = 4000;

// Range input is 0..=100
pub const VOLUME_SLIDER_MAX: f32 = 100.0;
