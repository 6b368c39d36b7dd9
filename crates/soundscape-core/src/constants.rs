use crate::platform::CompressorSettings;

// Synthesis and scheduling tuning shared by the graph builders.

// Shaping
pub const BUTTERWORTH_Q: f32 = 0.707; // flat passband for plain low/high-pass stages

// Noise beds
pub const NOISE_BUFFER_SECONDS: f32 = 2.0; // loop length for every noise bed
pub const WHITE_LOWPASS_HZ: f32 = 1000.0;
pub const WHITE_LEVEL: f32 = 0.5;
pub const PINK_LOWPASS_HZ: f32 = 2500.0; // gentle, keeps the upper range soft
pub const PINK_LEVEL: f32 = 0.6;
pub const BROWN_LEAK: f32 = 0.02; // k in out = (prev + k*white) / (1 + k)
pub const BROWN_MAKEUP_GAIN: f32 = 3.5;
pub const BROWN_LOWPASS_HZ: f32 = 800.0;
pub const BROWN_LEVEL: f32 = 0.6;

// Heartbeat
pub const HEARTBEAT_TONE_HZ: f32 = 55.0;
pub const HEARTBEAT_RATE_HZ: f32 = 1.2; // 72 beats per minute
pub const HEARTBEAT_ENVELOPE_DEPTH: f32 = 0.5;
pub const HEARTBEAT_LOWPASS_HZ: f32 = 200.0;
pub const HEARTBEAT_Q: f32 = 5.0;
pub const HEARTBEAT_LEVEL: f32 = 0.8;

// Ocean
pub const OCEAN_LOWPASS_HZ: f32 = 500.0;
pub const OCEAN_SWELL_HZ: f32 = 0.1;
pub const OCEAN_LEVEL: f32 = 0.5;
pub const OCEAN_SWELL_DEPTH: f32 = 0.3;

// Rain
pub const RAIN_BANDPASS_HZ: f32 = 2500.0;
pub const RAIN_BANDPASS_Q: f32 = 0.5;
pub const RAIN_LEVEL: f32 = 0.4;
pub const RAIN_COMPRESSOR: CompressorSettings = CompressorSettings {
    threshold_db: -24.0,
    knee_db: 30.0,
    ratio: 12.0,
    attack_sec: 0.003,
    release_sec: 0.25,
};
pub const DROPLET_INTERVAL_SEC: f64 = 0.2;
pub const DROPLET_PROBABILITY: f64 = 0.3;
pub const DROPLET_MIN_SEC: f64 = 0.05;
pub const DROPLET_MAX_SEC: f64 = 0.15;
pub const DROPLET_CUTOFF_MIN_HZ: f32 = 1000.0;
pub const DROPLET_CUTOFF_MAX_HZ: f32 = 5000.0;
pub const DROPLET_GAIN_MIN: f32 = 0.05;
pub const DROPLET_GAIN_MAX: f32 = 0.2;

// Snow wind
pub const SNOW_LEVEL: f32 = 0.15;
pub const SNOW_HIGHPASS_HZ: f32 = 1500.0;
pub const SNOW_LOWPASS_HZ: f32 = 7500.0;
pub const SNOW_BREATH_HZ: f32 = 0.05;
pub const SNOW_BREATH_DEPTH: f32 = 0.08;

// Forest
pub const FOREST_BANDPASS_HZ: f32 = 800.0;
pub const FOREST_BANDPASS_Q: f32 = 0.5;
pub const FOREST_LEVEL: f32 = 0.1;
pub const CHIRP_INTERVAL_SEC: f64 = 2.0;
pub const CHIRP_PROBABILITY: f64 = 0.3;
pub const DOUBLE_CHIRP_PROBABILITY: f64 = 0.5;
pub const CHIRP_DURATION_SEC: f64 = 0.15;
pub const CHIRP_GAP_SEC: f64 = 0.2; // second chirp offset in a double chirp
pub const CHIRP_BASE_MIN_HZ: f32 = 2000.0;
pub const CHIRP_BASE_MAX_HZ: f32 = 4000.0;
pub const CHIRP_SWEEP_RATIO: f32 = 1.5;
pub const CHIRP_PEAK_GAIN: f32 = 0.08;
pub const RUSTLE_INTERVAL_SEC: f64 = 3.0;
pub const RUSTLE_PROBABILITY: f64 = 0.2;
pub const RUSTLE_MIN_SEC: f64 = 0.3;
pub const RUSTLE_MAX_SEC: f64 = 0.8;
pub const RUSTLE_CENTER_MIN_HZ: f32 = 1000.0;
pub const RUSTLE_CENTER_MAX_HZ: f32 = 3000.0;
pub const RUSTLE_PEAK_GAIN: f32 = 0.06;

// Lullaby
pub const LULLABY_TEMPO_BPM: f32 = 72.0;
pub const LULLABY_PEAK_GAIN: f32 = 0.25;
pub const LULLABY_FADE_SEC: f64 = 0.05; // linear fade-in length; fade-out fills the rest
pub const LULLABY_LOOKAHEAD_SEC: f64 = 0.1; // schedule each note this far ahead

// Output
pub const DEFAULT_VOLUME: f32 = 0.5;
pub const TRANSIENT_TAIL_SEC: f64 = 0.05; // extra life after a transient's envelope ends
