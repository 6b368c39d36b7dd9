use super::Graph;
use crate::constants::*;
use crate::error::AllocationError;
use crate::noise;
use crate::platform::{AudioPlatform, FilterKind};

// buffer -> low-pass -> level -> bus
fn noise_bed<P: AudioPlatform>(
    g: &mut Graph<'_, P>,
    samples: &[f32],
    lowpass_hz: f32,
    level: f32,
) -> Result<(), AllocationError> {
    let src = g.noise_source(samples)?;
    let lp = g.filter(FilterKind::Lowpass, lowpass_hz, BUTTERWORTH_Q)?;
    let out = g.gain(level)?;
    g.chain(&[&src, &lp, &out]);
    g.to_bus(&out);
    g.start(&src);
    Ok(())
}

fn bed_len<P: AudioPlatform>(g: &Graph<'_, P>) -> usize {
    noise::buffer_len(g.sample_rate(), NOISE_BUFFER_SECONDS)
}

pub fn white<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let len = bed_len(g);
    let samples = noise::white(g.rng(), len);
    noise_bed(g, &samples, WHITE_LOWPASS_HZ, WHITE_LEVEL)
}

pub fn pink<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let len = bed_len(g);
    let samples = noise::pink(g.rng(), len);
    noise_bed(g, &samples, PINK_LOWPASS_HZ, PINK_LEVEL)
}

pub fn brown<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let len = bed_len(g);
    let samples = noise::brown(g.rng(), len);
    noise_bed(g, &samples, BROWN_LOWPASS_HZ, BROWN_LEVEL)
}
