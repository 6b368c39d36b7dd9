use crate::category::SoundCategory;
use crate::engine::Engine;
use crate::error::AllocationError;
use crate::handles::{LiveHandle, LiveHandleSet};
use crate::platform::{AudioPlatform, CompressorSettings, FilterKind, Param, Waveform};
use crate::tasks::TaskKind;
use rand::rngs::StdRng;

/// Records every node and task a builder allocates so a failed build can be
/// rolled back and a successful one handed to the registry.
pub struct Graph<'a, P: AudioPlatform> {
    engine: &'a mut Engine<P>,
    category: SoundCategory,
    handles: LiveHandleSet<P::Node>,
}

impl<'a, P: AudioPlatform> Graph<'a, P> {
    pub fn new(engine: &'a mut Engine<P>, category: SoundCategory) -> Self {
        Self {
            engine,
            category,
            handles: LiveHandleSet::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.engine.platform.current_time()
    }

    pub fn sample_rate(&self) -> f32 {
        self.engine.platform.sample_rate()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.engine.rng
    }

    pub fn gain(&mut self, value: f32) -> Result<P::Node, AllocationError> {
        let node = self.engine.platform.create_gain(value)?;
        self.handles.push(LiveHandle::Stage(node.clone()));
        Ok(node)
    }

    pub fn filter(
        &mut self,
        kind: FilterKind,
        hz: f32,
        q: f32,
    ) -> Result<P::Node, AllocationError> {
        let node = self.engine.platform.create_filter(kind, hz, q)?;
        self.handles.push(LiveHandle::Stage(node.clone()));
        Ok(node)
    }

    pub fn compressor(&mut self, settings: CompressorSettings) -> Result<P::Node, AllocationError> {
        let node = self.engine.platform.create_compressor(settings)?;
        self.handles.push(LiveHandle::Stage(node.clone()));
        Ok(node)
    }

    pub fn oscillator(&mut self, waveform: Waveform, hz: f32) -> Result<P::Node, AllocationError> {
        let node = self.engine.platform.create_oscillator(waveform, hz)?;
        self.handles.push(LiveHandle::Source(node.clone()));
        Ok(node)
    }

    /// Looping buffer source over pre-generated noise.
    pub fn noise_source(&mut self, samples: &[f32]) -> Result<P::Node, AllocationError> {
        let node = self.engine.platform.create_buffer_source(samples, true)?;
        self.handles.push(LiveHandle::Source(node.clone()));
        Ok(node)
    }

    /// Connect each node to the next.
    pub fn chain(&mut self, nodes: &[&P::Node]) {
        for pair in nodes.windows(2) {
            self.engine.platform.connect(pair[0], pair[1]);
        }
    }

    pub fn connect(&mut self, from: &P::Node, to: &P::Node) {
        self.engine.platform.connect(from, to);
    }

    pub fn modulate(&mut self, from: &P::Node, to: &P::Node, param: Param) {
        self.engine.platform.connect_param(from, to, param);
    }

    pub fn to_bus(&mut self, node: &P::Node) {
        let bus = self.engine.output.node().clone();
        self.engine.platform.connect(node, &bus);
    }

    pub fn start(&mut self, source: &P::Node) {
        let now = self.now();
        self.engine.platform.start(source, now);
    }

    /// Register a recurring task owned by this graph's category.
    pub fn spawn(&mut self, due: f64, kind: TaskKind<P::Node>) {
        let id = self.engine.tasks.spawn(self.category, due, kind);
        self.handles.push(LiveHandle::Task(id));
    }

    pub fn finish(self) -> LiveHandleSet<P::Node> {
        self.handles
    }

    /// Release everything allocated so far.
    pub fn abandon(self) {
        let Graph {
            engine, handles, ..
        } = self;
        engine.release(handles);
    }
}
