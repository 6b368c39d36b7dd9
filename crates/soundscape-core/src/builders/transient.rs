//! Fire-and-forget bursts (droplets, chirps, rustles).
//!
//! Each burst is started and stopped against the rendering clock at creation
//! time and is never recorded in a handle set. Once the platform reaches the
//! scheduled stop the nodes go quiet on their own.

use crate::constants::TRANSIENT_TAIL_SEC;
use crate::engine::Engine;
use crate::error::AllocationError;
use crate::noise;
use crate::platform::{AudioPlatform, FilterKind, Param, Waveform};

pub struct Burst {
    pub filter: FilterKind,
    pub center_hz: f32,
    pub q: f32,
    pub peak: f32,
    /// Time from start to peak; zero means an instant attack.
    pub attack_sec: f64,
    pub duration_sec: f64,
}

/// Drop the nodes of a burst that failed part-way; none were started yet.
fn unwind<P: AudioPlatform>(
    p: &mut P,
    made: &[&P::Node],
    err: AllocationError,
) -> AllocationError {
    for node in made {
        p.disconnect(node);
    }
    err
}

/// One-shot noise buffer -> filter -> envelope -> bus, starting at `at`.
pub fn noise_burst<P: AudioPlatform>(
    engine: &mut Engine<P>,
    burst: Burst,
    at: f64,
) -> Result<(), AllocationError> {
    let len = noise::buffer_len(engine.platform.sample_rate(), burst.duration_sec as f32);
    let samples = noise::white(&mut engine.rng, len);
    let bus = engine.output.node().clone();
    let p = &mut engine.platform;

    let src = p.create_buffer_source(&samples, false)?;
    let filter = match p.create_filter(burst.filter, burst.center_hz, burst.q) {
        Ok(node) => node,
        Err(e) => return Err(unwind(p, &[&src], e)),
    };
    let env = match p.create_gain(0.0) {
        Ok(node) => node,
        Err(e) => return Err(unwind(p, &[&src, &filter], e)),
    };
    p.connect(&src, &filter);
    p.connect(&filter, &env);
    p.connect(&env, &bus);

    let end = at + burst.duration_sec;
    if burst.attack_sec > 0.0 {
        p.set_param_at(&env, Param::Gain, 0.0, at);
        p.ramp_param(&env, Param::Gain, burst.peak, at + burst.attack_sec);
    } else {
        p.set_param_at(&env, Param::Gain, burst.peak, at);
    }
    p.ramp_param(&env, Param::Gain, 0.0, end);
    p.start(&src, at);
    p.stop(&src, end + TRANSIENT_TAIL_SEC);
    Ok(())
}

/// Short sine burst sweeping upward from `base_hz`, starting at `at`.
pub fn chirp<P: AudioPlatform>(
    engine: &mut Engine<P>,
    base_hz: f32,
    sweep_ratio: f32,
    peak: f32,
    duration_sec: f64,
    at: f64,
) -> Result<(), AllocationError> {
    let bus = engine.output.node().clone();
    let p = &mut engine.platform;

    let osc = p.create_oscillator(Waveform::Sine, base_hz)?;
    let env = match p.create_gain(0.0) {
        Ok(node) => node,
        Err(e) => return Err(unwind(p, &[&osc], e)),
    };
    p.connect(&osc, &env);
    p.connect(&env, &bus);

    let end = at + duration_sec;
    p.set_param_at(&osc, Param::Frequency, base_hz, at);
    p.ramp_param(
        &osc,
        Param::Frequency,
        base_hz * sweep_ratio,
        at + duration_sec * 0.66,
    );
    p.set_param_at(&env, Param::Gain, 0.0, at);
    p.ramp_param(&env, Param::Gain, peak, at + 0.01);
    p.ramp_param(&env, Param::Gain, 0.0, end);
    p.start(&osc, at);
    p.stop(&osc, end + TRANSIENT_TAIL_SEC);
    Ok(())
}
