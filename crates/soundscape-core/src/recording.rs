//! In-memory [`AudioPlatform`] that records every graph operation.
//!
//! No audio is produced. The clock only moves when [`RecordingPlatform::advance`]
//! is called, allocations can be made to fail on demand, and the host
//! suspended state can be simulated. Used by the test suite and handy for
//! headless inspection of graph topology.

use crate::error::AllocationError;
use crate::platform::{AudioPlatform, CompressorSettings, FilterKind, Param, Waveform};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Gain,
    Filter(FilterKind),
    Compressor(CompressorSettings),
    Oscillator(Waveform),
    BufferSource { len: usize, looping: bool },
}

impl NodeKind {
    pub fn is_source(&self) -> bool {
        matches!(self, NodeKind::Oscillator(_) | NodeKind::BufferSource { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Automation {
    SetAt { param: Param, value: f32, at: f64 },
    Ramp { param: Param, value: f32, end: f64 },
    Cancel { param: Param, from: f64 },
}

#[derive(Clone, Debug)]
pub struct NodeRecord {
    pub kind: NodeKind,
    pub params: FnvHashMap<Param, f32>,
    pub automation: Vec<Automation>,
    pub started_at: Option<f64>,
    pub stopped_at: Option<f64>,
    pub disconnected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Node { from: NodeId, to: NodeId },
    Param { from: NodeId, to: NodeId, param: Param },
    Output { from: NodeId },
}

impl Edge {
    pub fn source(&self) -> NodeId {
        match *self {
            Edge::Node { from, .. } | Edge::Param { from, .. } | Edge::Output { from } => from,
        }
    }
}

#[derive(Debug)]
pub struct RecordingPlatform {
    nodes: Vec<NodeRecord>,
    edges: Vec<Edge>,
    now: f64,
    sample_rate: f32,
    suspended: bool,
    resume_calls: usize,
    allocations_left: Option<usize>,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        // Low rate keeps generated noise buffers small.
        Self::new(8_000.0)
    }
}

impl RecordingPlatform {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            now: 0.0,
            sample_rate,
            suspended: false,
            resume_calls: 0,
            allocations_left: None,
        }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume_calls(&self) -> usize {
        self.resume_calls
    }

    /// Let `n` more allocations succeed, then fail every one after.
    pub fn fail_allocations_after(&mut self, n: usize) {
        self.allocations_left = Some(n);
    }

    pub fn clear_allocation_failures(&mut self) {
        self.allocations_left = None;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &NodeRecord {
        &self.nodes[id.0 as usize]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeRecord)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_into(&self, to: NodeId) -> usize {
        self.edges
            .iter()
            .filter(|e| {
                matches!(e, Edge::Node { to: t, .. } | Edge::Param { to: t, .. } if *t == to)
            })
            .count()
    }

    pub fn output_feeds(&self) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter_map(|e| match e {
                Edge::Output { from } => Some(*from),
                _ => None,
            })
            .collect()
    }

    pub fn param(&self, id: NodeId, param: Param) -> Option<f32> {
        self.node(id).params.get(&param).copied()
    }

    /// Sources whose playback window covers the current clock.
    pub fn sounding_sources(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, n)| n.kind.is_source())
            .filter(|(_, n)| n.started_at.map_or(false, |t| t <= self.now))
            .filter(|(_, n)| n.stopped_at.map_or(true, |t| t > self.now))
            .map(|(id, _)| id)
            .collect()
    }

    fn allocate(&mut self, stage: &'static str, kind: NodeKind) -> Result<NodeId, AllocationError> {
        if let Some(left) = self.allocations_left.as_mut() {
            if *left == 0 {
                return Err(AllocationError::new(stage, "injected failure"));
            }
            *left -= 1;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind,
            params: FnvHashMap::default(),
            automation: Vec::new(),
            started_at: None,
            stopped_at: None,
            disconnected: false,
        });
        Ok(id)
    }

    fn record_mut(&mut self, id: &NodeId) -> &mut NodeRecord {
        &mut self.nodes[id.0 as usize]
    }
}

impl AudioPlatform for RecordingPlatform {
    type Node = NodeId;

    fn current_time(&self) -> f64 {
        self.now
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) {
        self.resume_calls += 1;
        self.suspended = false;
    }

    fn create_gain(&mut self, value: f32) -> Result<NodeId, AllocationError> {
        let id = self.allocate("gain", NodeKind::Gain)?;
        self.record_mut(&id).params.insert(Param::Gain, value);
        Ok(id)
    }

    fn create_filter(
        &mut self,
        kind: FilterKind,
        frequency_hz: f32,
        q: f32,
    ) -> Result<NodeId, AllocationError> {
        let id = self.allocate("filter", NodeKind::Filter(kind))?;
        let rec = self.record_mut(&id);
        rec.params.insert(Param::Frequency, frequency_hz);
        rec.params.insert(Param::Q, q);
        Ok(id)
    }

    fn create_compressor(
        &mut self,
        settings: CompressorSettings,
    ) -> Result<NodeId, AllocationError> {
        self.allocate("compressor", NodeKind::Compressor(settings))
    }

    fn create_oscillator(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
    ) -> Result<NodeId, AllocationError> {
        let id = self.allocate("oscillator", NodeKind::Oscillator(waveform))?;
        self.record_mut(&id).params.insert(Param::Frequency, frequency_hz);
        Ok(id)
    }

    fn create_buffer_source(
        &mut self,
        samples: &[f32],
        looping: bool,
    ) -> Result<NodeId, AllocationError> {
        self.allocate(
            "buffer source",
            NodeKind::BufferSource {
                len: samples.len(),
                looping,
            },
        )
    }

    fn connect(&mut self, from: &NodeId, to: &NodeId) {
        self.edges.push(Edge::Node { from: *from, to: *to });
    }

    fn connect_param(&mut self, from: &NodeId, to: &NodeId, param: Param) {
        self.edges.push(Edge::Param {
            from: *from,
            to: *to,
            param,
        });
    }

    fn connect_output(&mut self, from: &NodeId) {
        self.edges.push(Edge::Output { from: *from });
    }

    fn disconnect(&mut self, node: &NodeId) {
        self.edges.retain(|e| e.source() != *node);
        self.record_mut(node).disconnected = true;
    }

    fn start(&mut self, source: &NodeId, at: f64) {
        self.record_mut(source).started_at = Some(at);
    }

    fn stop(&mut self, source: &NodeId, at: f64) {
        let rec = self.record_mut(source);
        // An earlier scheduled stop wins, as on a real rendering platform.
        rec.stopped_at = Some(rec.stopped_at.map_or(at, |t| t.min(at)));
    }

    fn set_param(&mut self, node: &NodeId, param: Param, value: f32) {
        self.record_mut(node).params.insert(param, value);
    }

    fn set_param_at(&mut self, node: &NodeId, param: Param, value: f32, at: f64) {
        self.record_mut(node)
            .automation
            .push(Automation::SetAt { param, value, at });
    }

    fn ramp_param(&mut self, node: &NodeId, param: Param, value: f32, end: f64) {
        self.record_mut(node)
            .automation
            .push(Automation::Ramp { param, value, end });
    }

    fn cancel_scheduled(&mut self, node: &NodeId, param: Param, from: f64) {
        self.record_mut(node)
            .automation
            .push(Automation::Cancel { param, from });
    }
}
