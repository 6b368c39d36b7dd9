use crate::builders;
use crate::category::SoundCategory;
use crate::error::AllocationError;
use crate::handles::{self, LiveHandleSet};
use crate::output::OutputStage;
use crate::platform::AudioPlatform;
use crate::tasks::TaskQueue;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything a graph builder needs: the platform, the shared bus, the task
/// queue recurring schedulers live in, and the randomness source.
pub struct Engine<P: AudioPlatform> {
    pub(crate) platform: P,
    pub(crate) output: OutputStage<P::Node>,
    pub(crate) tasks: TaskQueue<P::Node>,
    pub(crate) rng: StdRng,
}

impl<P: AudioPlatform> Engine<P> {
    /// A fixed `seed` makes noise content and scheduler jitter reproducible.
    pub fn new(mut platform: P, volume: f32, seed: Option<u64>) -> Result<Self, AllocationError> {
        let output = OutputStage::new(&mut platform, volume)?;
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            platform,
            output,
            tasks: TaskQueue::new(),
            rng,
        })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn output(&self) -> &OutputStage<P::Node> {
        &self.output
    }

    pub fn tasks(&self) -> &TaskQueue<P::Node> {
        &self.tasks
    }

    pub fn set_volume(&mut self, level: f32) {
        self.output.set_volume(&mut self.platform, level);
    }

    /// Resume a host-suspended platform before new audio is scheduled.
    pub fn ensure_running(&mut self) {
        if self.platform.is_suspended() {
            log::debug!("[engine] platform suspended; resuming");
            self.platform.resume();
        }
    }

    pub fn release(&mut self, handles: LiveHandleSet<P::Node>) {
        handles::release_all(handles, &mut self.platform, &mut self.tasks);
    }

    /// Run every task whose due time has passed on the rendering clock.
    ///
    /// Tasks whose owning category is no longer live are dropped instead of
    /// run. Returns the number of tasks that ran.
    pub fn run_due_tasks(&mut self, is_live: impl Fn(SoundCategory) -> bool) -> usize {
        let now = self.platform.current_time();
        let mut ran = 0;
        for mut task in self.tasks.take_due(now) {
            if !is_live(task.owner) {
                log::debug!("[tasks] {} no longer playing; dropping task", task.owner);
                continue;
            }
            builders::run_task(self, &mut task, now);
            self.tasks.requeue(task);
            ran += 1;
        }
        ran
    }
}
