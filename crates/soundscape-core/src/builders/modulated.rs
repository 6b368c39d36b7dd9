//! Continuous beds whose loudness is swept by a low-frequency oscillator.

use super::Graph;
use crate::constants::*;
use crate::error::AllocationError;
use crate::noise;
use crate::platform::{AudioPlatform, FilterKind, Param, Waveform};

/// Sine LFO -> depth gain -> `target.gain`. The target's own gain value is
/// the centre the LFO swings around.
fn lfo<P: AudioPlatform>(
    g: &mut Graph<'_, P>,
    rate_hz: f32,
    depth: f32,
    target: &P::Node,
) -> Result<(), AllocationError> {
    let osc = g.oscillator(Waveform::Sine, rate_hz)?;
    let amount = g.gain(depth)?;
    g.connect(&osc, &amount);
    g.modulate(&amount, target, Param::Gain);
    g.start(&osc);
    Ok(())
}

fn white_bed<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<P::Node, AllocationError> {
    let len = noise::buffer_len(g.sample_rate(), NOISE_BUFFER_SECONDS);
    let samples = noise::white(g.rng(), len);
    g.noise_source(&samples)
}

pub fn heartbeat<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let tone = g.oscillator(Waveform::Sine, HEARTBEAT_TONE_HZ)?;
    let pulse = g.gain(HEARTBEAT_ENVELOPE_DEPTH)?;
    let body = g.filter(FilterKind::Lowpass, HEARTBEAT_LOWPASS_HZ, HEARTBEAT_Q)?;
    let out = g.gain(HEARTBEAT_LEVEL)?;
    g.chain(&[&tone, &pulse, &body, &out]);
    g.to_bus(&out);
    // Swings the pulse gain between 0 and 1 at the beat rate.
    lfo(g, HEARTBEAT_RATE_HZ, HEARTBEAT_ENVELOPE_DEPTH, &pulse)?;
    g.start(&tone);
    Ok(())
}

pub fn ocean<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let src = white_bed(g)?;
    let lp = g.filter(FilterKind::Lowpass, OCEAN_LOWPASS_HZ, BUTTERWORTH_Q)?;
    let swell = g.gain(OCEAN_LEVEL)?;
    g.chain(&[&src, &lp, &swell]);
    g.to_bus(&swell);
    lfo(g, OCEAN_SWELL_HZ, OCEAN_SWELL_DEPTH, &swell)?;
    g.start(&src);
    Ok(())
}

pub fn snow<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let src = white_bed(g)?;
    let hp = g.filter(FilterKind::Highpass, SNOW_HIGHPASS_HZ, BUTTERWORTH_Q)?;
    let lp = g.filter(FilterKind::Lowpass, SNOW_LOWPASS_HZ, BUTTERWORTH_Q)?;
    let breath = g.gain(SNOW_LEVEL)?;
    g.chain(&[&src, &hp, &lp, &breath]);
    g.to_bus(&breath);
    lfo(g, SNOW_BREATH_HZ, SNOW_BREATH_DEPTH, &breath)?;
    g.start(&src);
    Ok(())
}
