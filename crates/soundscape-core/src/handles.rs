use crate::platform::AudioPlatform;
use crate::tasks::{TaskId, TaskQueue};
use smallvec::SmallVec;

/// A stoppable resource owned by one active category.
#[derive(Clone, Debug)]
pub enum LiveHandle<N> {
    /// Oscillator or buffer source: stopped, then disconnected.
    Source(N),
    /// Filter, gain or compressor: disconnected.
    Stage(N),
    /// Recurring scheduler: cancelled.
    Task(TaskId),
}

/// Handles for one category, in construction order.
pub type LiveHandleSet<N> = SmallVec<[LiveHandle<N>; 8]>;

impl<N> LiveHandle<N> {
    pub fn release<P>(self, platform: &mut P, tasks: &mut TaskQueue<N>)
    where
        P: AudioPlatform<Node = N>,
    {
        match self {
            LiveHandle::Source(node) => {
                let now = platform.current_time();
                platform.stop(&node, now);
                platform.disconnect(&node);
            }
            LiveHandle::Stage(node) => platform.disconnect(&node),
            LiveHandle::Task(id) => {
                tasks.cancel(id);
            }
        }
    }
}

/// Release every handle in order.
pub fn release_all<P>(
    handles: LiveHandleSet<P::Node>,
    platform: &mut P,
    tasks: &mut TaskQueue<P::Node>,
)
where
    P: AudioPlatform,
{
    for handle in handles {
        handle.release(platform, tasks);
    }
}
