use super::transient::{self, Burst};
use super::Graph;
use crate::constants::*;
use crate::engine::Engine;
use crate::error::AllocationError;
use crate::noise;
use crate::platform::{AudioPlatform, FilterKind};
use crate::tasks::TaskKind;
use rand::Rng;

/// Band-limited, compressed hiss plus a droplet scheduler.
pub fn build<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let len = noise::buffer_len(g.sample_rate(), NOISE_BUFFER_SECONDS);
    let samples = noise::white(g.rng(), len);
    let src = g.noise_source(&samples)?;
    let band = g.filter(FilterKind::Bandpass, RAIN_BANDPASS_HZ, RAIN_BANDPASS_Q)?;
    let squash = g.compressor(RAIN_COMPRESSOR)?;
    let out = g.gain(RAIN_LEVEL)?;
    g.chain(&[&src, &band, &squash, &out]);
    g.to_bus(&out);
    g.start(&src);

    let first = g.now() + DROPLET_INTERVAL_SEC;
    g.spawn(first, TaskKind::Droplets);
    Ok(())
}

pub fn droplet<P: AudioPlatform>(engine: &mut Engine<P>, now: f64) -> Result<(), AllocationError> {
    let rng = &mut engine.rng;
    let burst = Burst {
        filter: FilterKind::Lowpass,
        center_hz: rng.gen_range(DROPLET_CUTOFF_MIN_HZ..=DROPLET_CUTOFF_MAX_HZ),
        q: BUTTERWORTH_Q,
        peak: rng.gen_range(DROPLET_GAIN_MIN..=DROPLET_GAIN_MAX),
        attack_sec: 0.0,
        duration_sec: rng.gen_range(DROPLET_MIN_SEC..=DROPLET_MAX_SEC),
    };
    transient::noise_burst(engine, burst, now)
}
