// Recurring schedulers, transients and the lullaby stepper.

use instant::Instant;
use soundscape_core::music::LULLABY;
use soundscape_core::recording::{Automation, NodeId, NodeKind, RecordingPlatform};
use soundscape_core::{
    Engine, Param, PlaybackRegistry, Session, SessionConfig, SoundCategory, Waveform,
};

fn session() -> Session<RecordingPlatform> {
    let config = SessionConfig {
        seed: Some(7),
        ..SessionConfig::default()
    };
    Session::new(RecordingPlatform::default(), config).expect("output stage")
}

/// Advance the rendering clock in `step` increments for `seconds`, ticking
/// the session after each step.
fn run_for(s: &mut Session<RecordingPlatform>, seconds: f64, step: f64) {
    let now = Instant::now();
    let steps = (seconds / step).round() as usize;
    for _ in 0..steps {
        s.platform_mut().advance(step);
        s.tick(now);
    }
}

#[test]
fn rain_spawns_untracked_droplets() {
    let mut s = session();
    s.toggle(SoundCategory::Rain);
    let handles = s.registry().handle_count(SoundCategory::Rain);
    let nodes = s.platform().node_count();

    run_for(&mut s, 20.0, 0.05);

    assert!(s.platform().node_count() > nodes, "no droplets in 20 s");
    assert_eq!(s.registry().handle_count(SoundCategory::Rain), handles);
    // Every droplet source is one-shot with a scheduled end.
    for (_, n) in s.platform().nodes().skip(nodes) {
        if let NodeKind::BufferSource { looping, .. } = n.kind {
            assert!(!looping);
            assert!(n.stopped_at.is_some());
        }
    }
}

#[test]
fn stopping_rain_halts_the_droplet_scheduler() {
    let mut s = session();
    s.toggle(SoundCategory::Rain);
    run_for(&mut s, 5.0, 0.05);
    s.toggle(SoundCategory::Rain);

    // Droplets already in flight may finish, but they are all bounded.
    let bed_is_silent = s
        .platform()
        .sounding_sources()
        .into_iter()
        .all(|id| s.platform().node(id).stopped_at.is_some());
    assert!(bed_is_silent);

    let nodes = s.platform().node_count();
    run_for(&mut s, 10.0, 0.05);
    assert_eq!(s.platform().node_count(), nodes);
    assert!(s.platform().sounding_sources().is_empty());
}

#[test]
fn forest_chirps_and_rustles_over_time() {
    let mut s = session();
    s.toggle(SoundCategory::Forest);
    let nodes = s.platform().node_count();
    run_for(&mut s, 120.0, 0.1);

    let new: Vec<_> = s.platform().nodes().skip(nodes).collect();
    let chirps = new
        .iter()
        .filter(|(_, n)| n.kind == NodeKind::Oscillator(Waveform::Sine))
        .count();
    let rustles = new
        .iter()
        .filter(|(_, n)| matches!(n.kind, NodeKind::BufferSource { .. }))
        .count();
    assert!(chirps > 0, "no chirps in two minutes");
    assert!(rustles > 0, "no rustles in two minutes");
    assert_eq!(s.engine().tasks().owned_by(SoundCategory::Forest), 2);
}

#[test]
fn chirps_sweep_upward() {
    let mut s = session();
    s.toggle(SoundCategory::Forest);
    let nodes = s.platform().node_count();
    run_for(&mut s, 60.0, 0.1);

    let (_, chirp) = s
        .platform()
        .nodes()
        .skip(nodes)
        .find(|(_, n)| n.kind == NodeKind::Oscillator(Waveform::Sine))
        .expect("a chirp");
    let freqs: Vec<f32> = chirp
        .automation
        .iter()
        .filter_map(|a| match *a {
            Automation::SetAt {
                param: Param::Frequency,
                value,
                ..
            }
            | Automation::Ramp {
                param: Param::Frequency,
                value,
                ..
            } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(freqs.len(), 2);
    assert!(freqs[1] > freqs[0]);
}

#[test]
fn tasks_drop_themselves_when_owner_is_gone() {
    let mut engine = Engine::new(RecordingPlatform::default(), 0.5, Some(1)).unwrap();
    let mut registry = PlaybackRegistry::new();
    registry.start(SoundCategory::Forest, &mut engine).unwrap();
    assert_eq!(engine.tasks().owned_by(SoundCategory::Forest), 2);

    engine.platform_mut().advance(5.0);
    assert_eq!(engine.run_due_tasks(|_| false), 0);
    assert_eq!(engine.tasks().owned_by(SoundCategory::Forest), 0);

    // Teardown afterwards still works; cancelling a vanished task is harmless.
    assert!(registry.stop(SoundCategory::Forest, &mut engine));
}

fn lullaby_voice(s: &Session<RecordingPlatform>) -> NodeId {
    s.platform()
        .nodes()
        .find(|(_, n)| matches!(n.kind, NodeKind::Oscillator(_)))
        .map(|(id, _)| id)
        .expect("lullaby oscillator")
}

fn scheduled_pitches(s: &Session<RecordingPlatform>, osc: NodeId) -> Vec<(f64, f32)> {
    s.platform()
        .node(osc)
        .automation
        .iter()
        .filter_map(|a| match *a {
            Automation::SetAt {
                param: Param::Frequency,
                value,
                at,
            } => Some((at, value)),
            _ => None,
        })
        .collect()
}

#[test]
fn lullaby_loops_through_its_notes_in_order() {
    let mut s = session();
    s.toggle(SoundCategory::Lullaby);
    let osc = lullaby_voice(&s);
    run_for(&mut s, 60.0, 0.05);

    let pitches = scheduled_pitches(&s, osc);
    let sounding = LULLABY.iter().filter(|n| n.midi.is_some()).count();
    assert!(pitches.len() > sounding, "melody did not loop");
    assert!(pitches.windows(2).all(|w| w[1].0 > w[0].0));
    assert_eq!(Some(pitches[0].1), LULLABY[0].frequency_hz());
    assert_eq!(Some(pitches[sounding].1), LULLABY[0].frequency_hz());
}

#[test]
fn lullaby_stepper_stops_with_its_category() {
    let mut s = session();
    s.toggle(SoundCategory::Lullaby);
    let osc = lullaby_voice(&s);
    run_for(&mut s, 5.0, 0.05);
    s.toggle(SoundCategory::Lullaby);
    let scheduled = scheduled_pitches(&s, osc).len();

    run_for(&mut s, 30.0, 0.05);
    assert_eq!(scheduled_pitches(&s, osc).len(), scheduled);
    assert!(s.engine().tasks().is_empty());
}

#[test]
fn droplet_that_cannot_allocate_leaves_nothing_wired() {
    let mut s = session();
    s.toggle(SoundCategory::Rain);
    let bed = s.platform().node_count();
    // One more node fits: each droplet gets its source, then its filter fails.
    s.platform_mut().fail_allocations_after(1);
    run_for(&mut s, 20.0, 0.05);

    assert_eq!(s.platform().node_count(), bed + 1);
    let orphan = s.platform().node(NodeId(bed as u32));
    assert!(orphan.disconnected);
    assert_eq!(orphan.started_at, None);
    assert!(s.platform().edges().iter().all(|e| e.source() != NodeId(bed as u32)));
    assert!(s.is_active(SoundCategory::Rain));
}

#[test]
fn forest_transient_that_cannot_allocate_leaves_nothing_wired() {
    let mut s = session();
    s.toggle(SoundCategory::Forest);
    let bed = s.platform().node_count();
    s.platform_mut().fail_allocations_after(1);
    run_for(&mut s, 120.0, 0.1);

    assert_eq!(s.platform().node_count(), bed + 1);
    let orphan = s.platform().node(NodeId(bed as u32));
    assert!(orphan.disconnected);
    assert_eq!(orphan.started_at, None);
    assert_eq!(s.engine().tasks().owned_by(SoundCategory::Forest), 2);
}
