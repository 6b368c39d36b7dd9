use crate::error::AllocationError;
use crate::platform::{AudioPlatform, Param};

/// The shared bus every category graph terminates into. Created once per
/// session and never torn down while the session lives.
#[derive(Debug)]
pub struct OutputStage<N> {
    node: N,
    level: f32,
}

impl<N: Clone> OutputStage<N> {
    pub fn new<P>(platform: &mut P, level: f32) -> Result<Self, AllocationError>
    where
        P: AudioPlatform<Node = N>,
    {
        let level = sanitize(level).unwrap_or(0.0);
        let node = platform.create_gain(level)?;
        platform.connect_output(&node);
        Ok(Self { node, level })
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Single scalar write; the last call wins for every connected graph.
    pub fn set_volume<P>(&mut self, platform: &mut P, level: f32)
    where
        P: AudioPlatform<Node = N>,
    {
        let Some(level) = sanitize(level) else {
            log::warn!("[output] ignoring non-numeric volume {level}");
            return;
        };
        let now = platform.current_time();
        platform.cancel_scheduled(&self.node, Param::Gain, now);
        platform.set_param(&self.node, Param::Gain, level);
        self.level = level;
    }
}

#[inline]
fn sanitize(level: f32) -> Option<f32> {
    if level.is_nan() {
        None
    } else {
        Some(level.clamp(0.0, 1.0))
    }
}
