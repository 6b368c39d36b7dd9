use crate::builders;
use crate::category::SoundCategory;
use crate::engine::Engine;
use crate::error::SoundscapeError;
use crate::handles::LiveHandleSet;
use crate::platform::AudioPlatform;
use fnv::FnvHashMap;

/// Which categories are audible right now, and how to silence each of them.
///
/// A key is present if and only if its category is playing. Entries are only
/// created by a successful [`PlaybackRegistry::start`] and removed, with every
/// handle released, by [`PlaybackRegistry::stop`].
#[derive(Debug)]
pub struct PlaybackRegistry<N> {
    entries: FnvHashMap<SoundCategory, LiveHandleSet<N>>,
}

impl<N> Default for PlaybackRegistry<N> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<N> PlaybackRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, category: SoundCategory) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Active categories in display order.
    pub fn active(&self) -> Vec<SoundCategory> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn handle_count(&self, category: SoundCategory) -> Option<usize> {
        self.entries.get(&category).map(|h| h.len())
    }

    /// Build and register `category`. Already-playing categories are left
    /// alone. On failure nothing is recorded.
    pub fn start<P>(
        &mut self,
        category: SoundCategory,
        engine: &mut Engine<P>,
    ) -> Result<(), SoundscapeError>
    where
        P: AudioPlatform<Node = N>,
    {
        if self.contains(category) {
            log::debug!("[registry] {} already playing", category);
            return Ok(());
        }
        engine.ensure_running();
        let handles = builders::build(category, engine)?;
        log::info!("[registry] started {} ({} handles)", category, handles.len());
        self.entries.insert(category, handles);
        Ok(())
    }

    /// Release every handle of `category`. Returns false if it was not playing.
    pub fn stop<P>(&mut self, category: SoundCategory, engine: &mut Engine<P>) -> bool
    where
        P: AudioPlatform<Node = N>,
    {
        match self.entries.remove(&category) {
            Some(handles) => {
                engine.release(handles);
                log::info!("[registry] stopped {}", category);
                true
            }
            None => false,
        }
    }

    /// Stop everything; keys are snapshotted before any entry is removed.
    pub fn stop_all<P>(&mut self, engine: &mut Engine<P>) -> Vec<SoundCategory>
    where
        P: AudioPlatform<Node = N>,
    {
        let keys = self.active();
        for category in &keys {
            self.stop(*category, engine);
        }
        keys
    }
}
