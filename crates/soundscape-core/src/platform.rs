//! Capability contract between the soundscape core and a real-time audio
//! backend.
//!
//! The core never touches a concrete audio API. Everything it needs from the
//! rendering platform (node creation, wiring, scheduling, the clock) goes
//! through [`AudioPlatform`]. The browser front end implements it on top of
//! WebAudio; tests use [`crate::recording::RecordingPlatform`].

use crate::error::AllocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Lowpass,
    Highpass,
    Bandpass,
}

/// Automatable parameter selector on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Gain,
    Frequency,
    Q,
}

/// Dynamics-compression settings, in the units WebAudio uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressorSettings {
    pub threshold_db: f32,
    pub knee_db: f32,
    pub ratio: f32,
    pub attack_sec: f32,
    pub release_sec: f32,
}

pub trait AudioPlatform {
    /// Opaque node reference. Cloning must be cheap and refer to the same
    /// underlying node.
    type Node: Clone + std::fmt::Debug;

    /// Monotonic rendering clock in seconds.
    fn current_time(&self) -> f64;
    fn sample_rate(&self) -> f32;

    /// True when the host has suspended rendering (power or lock policy).
    fn is_suspended(&self) -> bool;
    fn resume(&mut self);

    fn create_gain(&mut self, value: f32) -> Result<Self::Node, AllocationError>;
    fn create_filter(
        &mut self,
        kind: FilterKind,
        frequency_hz: f32,
        q: f32,
    ) -> Result<Self::Node, AllocationError>;
    fn create_compressor(
        &mut self,
        settings: CompressorSettings,
    ) -> Result<Self::Node, AllocationError>;
    fn create_oscillator(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
    ) -> Result<Self::Node, AllocationError>;
    /// Mono buffer source holding `samples` at the platform sample rate.
    fn create_buffer_source(
        &mut self,
        samples: &[f32],
        looping: bool,
    ) -> Result<Self::Node, AllocationError>;

    fn connect(&mut self, from: &Self::Node, to: &Self::Node);
    /// Route a node's output into an automatable parameter of another node.
    fn connect_param(&mut self, from: &Self::Node, to: &Self::Node, param: Param);
    /// Route a node into the physical output.
    fn connect_output(&mut self, from: &Self::Node);
    fn disconnect(&mut self, node: &Self::Node);

    fn start(&mut self, source: &Self::Node, at: f64);
    fn stop(&mut self, source: &Self::Node, at: f64);

    fn set_param(&mut self, node: &Self::Node, param: Param, value: f32);
    fn set_param_at(&mut self, node: &Self::Node, param: Param, value: f32, at: f64);
    fn ramp_param(&mut self, node: &Self::Node, param: Param, value: f32, end: f64);
    fn cancel_scheduled(&mut self, node: &Self::Node, param: Param, from: f64);
}
