use super::transient::{self, Burst};
use super::Graph;
use crate::constants::*;
use crate::engine::Engine;
use crate::error::AllocationError;
use crate::noise;
use crate::platform::{AudioPlatform, FilterKind};
use crate::tasks::TaskKind;
use rand::Rng;

/// Quiet band-passed background with chirp and rustle schedulers on top.
pub fn build<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let len = noise::buffer_len(g.sample_rate(), NOISE_BUFFER_SECONDS);
    let samples = noise::white(g.rng(), len);
    let src = g.noise_source(&samples)?;
    let band = g.filter(FilterKind::Bandpass, FOREST_BANDPASS_HZ, FOREST_BANDPASS_Q)?;
    let out = g.gain(FOREST_LEVEL)?;
    g.chain(&[&src, &band, &out]);
    g.to_bus(&out);
    g.start(&src);

    let now = g.now();
    g.spawn(now + CHIRP_INTERVAL_SEC, TaskKind::Chirps);
    g.spawn(now + RUSTLE_INTERVAL_SEC, TaskKind::Rustles);
    Ok(())
}

/// A bird chirp, doubled about half the time.
pub fn chirps<P: AudioPlatform>(engine: &mut Engine<P>, now: f64) -> Result<(), AllocationError> {
    let base = engine.rng.gen_range(CHIRP_BASE_MIN_HZ..=CHIRP_BASE_MAX_HZ);
    let double = engine.rng.gen_bool(DOUBLE_CHIRP_PROBABILITY);
    transient::chirp(
        engine,
        base,
        CHIRP_SWEEP_RATIO,
        CHIRP_PEAK_GAIN,
        CHIRP_DURATION_SEC,
        now,
    )?;
    if double {
        transient::chirp(
            engine,
            base,
            CHIRP_SWEEP_RATIO,
            CHIRP_PEAK_GAIN,
            CHIRP_DURATION_SEC,
            now + CHIRP_GAP_SEC,
        )?;
    }
    Ok(())
}

pub fn rustle<P: AudioPlatform>(engine: &mut Engine<P>, now: f64) -> Result<(), AllocationError> {
    let rng = &mut engine.rng;
    let duration_sec = rng.gen_range(RUSTLE_MIN_SEC..=RUSTLE_MAX_SEC);
    let burst = Burst {
        filter: FilterKind::Bandpass,
        center_hz: rng.gen_range(RUSTLE_CENTER_MIN_HZ..=RUSTLE_CENTER_MAX_HZ),
        q: FOREST_BANDPASS_Q,
        peak: RUSTLE_PEAK_GAIN,
        attack_sec: duration_sec * 0.5,
        duration_sec,
    };
    transient::noise_burst(engine, burst, now)
}
