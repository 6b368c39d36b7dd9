use super::Graph;
use crate::constants::{LULLABY_FADE_SEC, LULLABY_LOOKAHEAD_SEC, LULLABY_PEAK_GAIN};
use crate::engine::Engine;
use crate::error::AllocationError;
use crate::music::LULLABY;
use crate::platform::{AudioPlatform, Param, Waveform};
use crate::tasks::TaskKind;

/// One oscillator/gain voice; the melody stepper does the rest.
pub fn build<P: AudioPlatform>(g: &mut Graph<'_, P>) -> Result<(), AllocationError> {
    let first_hz = LULLABY
        .iter()
        .find_map(|n| n.frequency_hz())
        .unwrap_or(440.0);
    let osc = g.oscillator(Waveform::Sine, first_hz)?;
    let amp = g.gain(0.0)?;
    g.connect(&osc, &amp);
    g.to_bus(&amp);
    g.start(&osc);

    let now = g.now();
    g.spawn(
        now,
        TaskKind::Melody {
            osc,
            amp,
            step: 0,
            next_start: now + LULLABY_LOOKAHEAD_SEC,
        },
    );
    Ok(())
}

/// Schedule the note at `step` and advance. Returns when to run next:
/// shortly before the following note is due to sound.
pub fn step<P: AudioPlatform>(
    engine: &mut Engine<P>,
    osc: &P::Node,
    amp: &P::Node,
    step: &mut usize,
    next_start: &mut f64,
    now: f64,
) -> f64 {
    let note = LULLABY[*step % LULLABY.len()];
    let start = next_start.max(now);
    let end = start + note.duration_sec();
    let p = &mut engine.platform;
    if let Some(hz) = note.frequency_hz() {
        p.set_param_at(osc, Param::Frequency, hz, start);
        p.set_param_at(amp, Param::Gain, 0.0, start);
        p.ramp_param(amp, Param::Gain, LULLABY_PEAK_GAIN, start + LULLABY_FADE_SEC);
        p.ramp_param(amp, Param::Gain, 0.0, end);
    }
    *step = (*step + 1) % LULLABY.len();
    *next_start = end;
    end - LULLABY_LOOKAHEAD_SEC
}
