use soundscape_core::{
    AllocationError, AudioPlatform, CompressorSettings, FilterKind, Param, Waveform,
};
use web_sys as web;

/// A WebAudio node the core can wire and automate.
#[derive(Clone, Debug)]
pub enum WebNode {
    Gain(web::GainNode),
    Filter(web::BiquadFilterNode),
    Compressor(web::DynamicsCompressorNode),
    Oscillator(web::OscillatorNode),
    Buffer(web::AudioBufferSourceNode),
}

impl WebNode {
    fn audio_node(&self) -> &web::AudioNode {
        match self {
            WebNode::Gain(n) => n,
            WebNode::Filter(n) => n,
            WebNode::Compressor(n) => n,
            WebNode::Oscillator(n) => n,
            WebNode::Buffer(n) => n,
        }
    }

    fn scheduled(&self) -> Option<&web::AudioScheduledSourceNode> {
        match self {
            WebNode::Oscillator(n) => Some(&**n),
            WebNode::Buffer(n) => Some(&**n),
            _ => None,
        }
    }

    fn param(&self, param: Param) -> Option<web::AudioParam> {
        match (self, param) {
            (WebNode::Gain(n), Param::Gain) => Some(n.gain()),
            (WebNode::Filter(n), Param::Frequency) => Some(n.frequency()),
            (WebNode::Filter(n), Param::Q) => Some(n.q()),
            (WebNode::Filter(n), Param::Gain) => Some(n.gain()),
            (WebNode::Oscillator(n), Param::Frequency) => Some(n.frequency()),
            _ => None,
        }
    }
}

fn alloc_err(stage: &'static str, e: wasm_bindgen::JsValue) -> AllocationError {
    log::error!("{} node error: {:?}", stage, e);
    AllocationError::new(stage, format!("{:?}", e))
}

/// [`AudioPlatform`] over a browser `AudioContext`.
pub struct WebAudioPlatform {
    ctx: web::AudioContext,
}

impl WebAudioPlatform {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    fn param_or_warn(&self, node: &WebNode, param: Param) -> Option<web::AudioParam> {
        let p = node.param(param);
        if p.is_none() {
            log::warn!("[audio] {:?} has no {:?} param", node, param);
        }
        p
    }
}

impl AudioPlatform for WebAudioPlatform {
    type Node = WebNode;

    fn current_time(&self) -> f64 {
        self.ctx.current_time()
    }

    fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate()
    }

    fn is_suspended(&self) -> bool {
        self.ctx.state() == web::AudioContextState::Suspended
    }

    fn resume(&mut self) {
        _ = self.ctx.resume();
    }

    fn create_gain(&mut self, value: f32) -> Result<WebNode, AllocationError> {
        let g = web::GainNode::new(&self.ctx).map_err(|e| alloc_err("gain", e))?;
        g.gain().set_value(value);
        Ok(WebNode::Gain(g))
    }

    fn create_filter(
        &mut self,
        kind: FilterKind,
        frequency_hz: f32,
        q: f32,
    ) -> Result<WebNode, AllocationError> {
        let f = web::BiquadFilterNode::new(&self.ctx).map_err(|e| alloc_err("filter", e))?;
        f.set_type(match kind {
            FilterKind::Lowpass => web::BiquadFilterType::Lowpass,
            FilterKind::Highpass => web::BiquadFilterType::Highpass,
            FilterKind::Bandpass => web::BiquadFilterType::Bandpass,
        });
        f.frequency().set_value(frequency_hz);
        f.q().set_value(q);
        Ok(WebNode::Filter(f))
    }

    fn create_compressor(
        &mut self,
        settings: CompressorSettings,
    ) -> Result<WebNode, AllocationError> {
        let c = web::DynamicsCompressorNode::new(&self.ctx)
            .map_err(|e| alloc_err("compressor", e))?;
        c.threshold().set_value(settings.threshold_db);
        c.knee().set_value(settings.knee_db);
        c.ratio().set_value(settings.ratio);
        c.attack().set_value(settings.attack_sec);
        c.release().set_value(settings.release_sec);
        Ok(WebNode::Compressor(c))
    }

    fn create_oscillator(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
    ) -> Result<WebNode, AllocationError> {
        let o = web::OscillatorNode::new(&self.ctx).map_err(|e| alloc_err("oscillator", e))?;
        o.set_type(match waveform {
            Waveform::Sine => web::OscillatorType::Sine,
            Waveform::Square => web::OscillatorType::Square,
            Waveform::Sawtooth => web::OscillatorType::Sawtooth,
            Waveform::Triangle => web::OscillatorType::Triangle,
        });
        o.frequency().set_value(frequency_hz);
        Ok(WebNode::Oscillator(o))
    }

    fn create_buffer_source(
        &mut self,
        samples: &[f32],
        looping: bool,
    ) -> Result<WebNode, AllocationError> {
        let len = samples.len().max(1) as u32;
        let buffer = self
            .ctx
            .create_buffer(1, len, self.ctx.sample_rate())
            .map_err(|e| alloc_err("buffer", e))?;
        let mut data = samples.to_vec();
        buffer
            .copy_to_channel(&mut data, 0)
            .map_err(|e| alloc_err("buffer", e))?;
        let src = web::AudioBufferSourceNode::new(&self.ctx)
            .map_err(|e| alloc_err("buffer source", e))?;
        src.set_buffer(Some(&buffer));
        src.set_loop(looping);
        Ok(WebNode::Buffer(src))
    }

    fn connect(&mut self, from: &WebNode, to: &WebNode) {
        _ = from.audio_node().connect_with_audio_node(to.audio_node());
    }

    fn connect_param(&mut self, from: &WebNode, to: &WebNode, param: Param) {
        if let Some(p) = self.param_or_warn(to, param) {
            _ = from.audio_node().connect_with_audio_param(&p);
        }
    }

    fn connect_output(&mut self, from: &WebNode) {
        _ = from
            .audio_node()
            .connect_with_audio_node(&self.ctx.destination());
    }

    fn disconnect(&mut self, node: &WebNode) {
        _ = node.audio_node().disconnect();
    }

    fn start(&mut self, source: &WebNode, at: f64) {
        if let Some(s) = source.scheduled() {
            _ = s.start_with_when(at);
        }
    }

    fn stop(&mut self, source: &WebNode, at: f64) {
        // Throws if the source never started; nothing to silence then.
        if let Some(s) = source.scheduled() {
            _ = s.stop_with_when(at);
        }
    }

    fn set_param(&mut self, node: &WebNode, param: Param, value: f32) {
        if let Some(p) = self.param_or_warn(node, param) {
            p.set_value(value);
        }
    }

    fn set_param_at(&mut self, node: &WebNode, param: Param, value: f32, at: f64) {
        if let Some(p) = self.param_or_warn(node, param) {
            _ = p.set_value_at_time(value, at);
        }
    }

    fn ramp_param(&mut self, node: &WebNode, param: Param, value: f32, end: f64) {
        if let Some(p) = self.param_or_warn(node, param) {
            _ = p.linear_ramp_to_value_at_time(value, end);
        }
    }

    fn cancel_scheduled(&mut self, node: &WebNode, param: Param, from: f64) {
        if let Some(p) = self.param_or_warn(node, param) {
            _ = p.cancel_scheduled_values(from);
        }
    }
}
