//! One signal-graph builder per sound category.
//!
//! Builders are pure construction: they allocate nodes through a [`Graph`],
//! wire them into the shared bus and return the handles needed to stop them.
//! A failed allocation rolls back everything the builder made so far.

mod beds;
mod forest;
mod graph;
mod lullaby;
mod modulated;
mod rain;
mod transient;

pub use graph::Graph;

use crate::category::SoundCategory;
use crate::constants::{CHIRP_PROBABILITY, DROPLET_PROBABILITY, RUSTLE_PROBABILITY};
use crate::engine::Engine;
use crate::error::{AllocationError, SoundscapeError};
use crate::handles::LiveHandleSet;
use crate::platform::AudioPlatform;
use crate::tasks::{Task, TaskKind};
use rand::Rng;

pub fn build<P: AudioPlatform>(
    category: SoundCategory,
    engine: &mut Engine<P>,
) -> Result<LiveHandleSet<P::Node>, SoundscapeError> {
    let mut graph = Graph::new(engine, category);
    let built = match category {
        SoundCategory::White => beds::white(&mut graph),
        SoundCategory::Pink => beds::pink(&mut graph),
        SoundCategory::Brown => beds::brown(&mut graph),
        SoundCategory::Heartbeat => modulated::heartbeat(&mut graph),
        SoundCategory::Ocean => modulated::ocean(&mut graph),
        SoundCategory::Snow => modulated::snow(&mut graph),
        SoundCategory::Rain => rain::build(&mut graph),
        SoundCategory::Forest => forest::build(&mut graph),
        SoundCategory::Lullaby => lullaby::build(&mut graph),
    };
    match built {
        Ok(()) => Ok(graph.finish()),
        Err(source) => {
            graph.abandon();
            Err(SoundscapeError::Allocation { category, source })
        }
    }
}

/// Run one task invocation and set its next due time.
pub(crate) fn run_task<P: AudioPlatform>(
    engine: &mut Engine<P>,
    task: &mut Task<P::Node>,
    now: f64,
) {
    let fired: Result<(), AllocationError> = match &mut task.kind {
        TaskKind::Droplets => roll(engine, DROPLET_PROBABILITY, |e| rain::droplet(e, now)),
        TaskKind::Chirps => roll(engine, CHIRP_PROBABILITY, |e| forest::chirps(e, now)),
        TaskKind::Rustles => roll(engine, RUSTLE_PROBABILITY, |e| forest::rustle(e, now)),
        TaskKind::Melody {
            osc,
            amp,
            step,
            next_start,
        } => {
            task.due = lullaby::step(engine, osc, amp, step, next_start, now);
            return;
        }
    };
    if let Err(e) = fired {
        log::warn!("[tasks] {} transient skipped: {}", task.owner, e);
    }
    if let Some(interval) = task.kind.interval() {
        task.due = next_tick(task.due, interval, now);
    }
}

fn roll<P: AudioPlatform>(
    engine: &mut Engine<P>,
    probability: f64,
    spawn: impl FnOnce(&mut Engine<P>) -> Result<(), AllocationError>,
) -> Result<(), AllocationError> {
    if engine.rng.gen_bool(probability) {
        spawn(engine)
    } else {
        Ok(())
    }
}

/// Keep a fixed cadence, but never try to catch up on missed ticks.
fn next_tick(due: f64, interval: f64, now: f64) -> f64 {
    let next = due + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::next_tick;

    #[test]
    fn next_tick_keeps_cadence_when_on_time() {
        assert!((next_tick(1.0, 0.2, 1.05) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn next_tick_skips_backlog_when_late() {
        assert!((next_tick(1.0, 0.2, 5.0) - 5.2).abs() < 1e-9);
    }
}
