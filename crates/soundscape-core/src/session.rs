//! Session coordinator: the single entry point for UI intents.
//!
//! Owns the engine (platform + output stage + tasks), the playback registry
//! and the sleep timer. Encodes exclusive vs. combination playback and hands
//! back only presentational facts via [`SessionSnapshot`].

use crate::category::SoundCategory;
use crate::constants::DEFAULT_VOLUME;
use crate::engine::Engine;
use crate::error::{AllocationError, SoundscapeError};
use crate::platform::AudioPlatform;
use crate::registry::PlaybackRegistry;
use crate::timer::{format_remaining, SleepTimer, TimerPoll};
use instant::Instant;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub initial_volume: f32,
    /// Fixed seed for reproducible noise content; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// One category at a time.
    #[default]
    Exclusive,
    /// Whatever the last combination commit started.
    Combination,
}

/// Pending category picks for combined playback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinationSelection {
    selected: [bool; SoundCategory::COUNT],
}

impl CombinationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: SoundCategory, selected: bool) {
        self.selected[category.index()] = selected;
    }

    /// Flip a pick; returns the new state.
    pub fn toggle(&mut self, category: SoundCategory) -> bool {
        let slot = &mut self.selected[category.index()];
        *slot = !*slot;
        *slot
    }

    pub fn is_selected(&self, category: SoundCategory) -> bool {
        self.selected[category.index()]
    }

    pub fn selected(&self) -> Vec<SoundCategory> {
        SoundCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.is_selected(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|s| *s)
    }

    pub fn clear(&mut self) {
        self.selected = [false; SoundCategory::COUNT];
    }
}

impl FromIterator<(SoundCategory, bool)> for CombinationSelection {
    fn from_iter<I: IntoIterator<Item = (SoundCategory, bool)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (category, selected) in iter {
            selection.set(category, selected);
        }
        selection
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started(SoundCategory),
    Stopped(Vec<SoundCategory>),
    /// The platform could not build the graph; nothing is playing for it.
    Failed(SoundCategory),
    /// Unknown id; nothing changed.
    Ignored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tasks_run: usize,
    pub timer_expired: bool,
}

/// What the UI needs to render; no handles cross this boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub active: Vec<SoundCategory>,
    pub mode: PlaybackMode,
    pub volume: f32,
    pub countdown: Option<String>,
    pub combination_panel_open: bool,
    pub pending: Vec<SoundCategory>,
}

pub struct Session<P: AudioPlatform> {
    engine: Engine<P>,
    registry: PlaybackRegistry<P::Node>,
    timer: SleepTimer,
    mode: PlaybackMode,
    selection: CombinationSelection,
    panel_open: bool,
}

impl<P: AudioPlatform> Session<P> {
    pub fn new(platform: P, config: SessionConfig) -> Result<Self, AllocationError> {
        let engine = Engine::new(platform, config.initial_volume, config.seed)?;
        Ok(Self {
            engine,
            registry: PlaybackRegistry::new(),
            timer: SleepTimer::new(),
            mode: PlaybackMode::Exclusive,
            selection: CombinationSelection::new(),
            panel_open: false,
        })
    }

    pub fn engine(&self) -> &Engine<P> {
        &self.engine
    }

    pub fn platform(&self) -> &P {
        self.engine.platform()
    }

    pub fn platform_mut(&mut self) -> &mut P {
        self.engine.platform_mut()
    }

    pub fn registry(&self) -> &PlaybackRegistry<P::Node> {
        &self.registry
    }

    pub fn timer(&self) -> &SleepTimer {
        &self.timer
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_active(&self, category: SoundCategory) -> bool {
        self.registry.contains(category)
    }

    pub fn active(&self) -> Vec<SoundCategory> {
        self.registry.active()
    }

    /// Tile press. Stops an active category (the whole combination if it
    /// came from one); otherwise switches to it exclusively.
    pub fn toggle(&mut self, category: SoundCategory) -> ToggleOutcome {
        if self.registry.contains(category) {
            let stopped = match self.mode {
                PlaybackMode::Combination => self.clear_playback(),
                PlaybackMode::Exclusive => {
                    self.registry.stop(category, &mut self.engine);
                    vec![category]
                }
            };
            return ToggleOutcome::Stopped(stopped);
        }

        self.clear_playback();
        match self.registry.start(category, &mut self.engine) {
            Ok(()) => ToggleOutcome::Started(category),
            Err(e) => {
                log::error!("[session] {}", e);
                ToggleOutcome::Failed(category)
            }
        }
    }

    /// Tile press carrying a string id from the UI layer.
    pub fn toggle_by_id(&mut self, id: &str) -> ToggleOutcome {
        match id.parse::<SoundCategory>() {
            Ok(category) => self.toggle(category),
            Err(e) => {
                log::warn!("[session] {}", e);
                ToggleOutcome::Ignored
            }
        }
    }

    /// Silence everything and disarm the timer.
    pub fn stop_all(&mut self) -> Vec<SoundCategory> {
        self.timer.cancel();
        self.clear_playback()
    }

    /// Tear down every graph; the timer keeps running.
    fn clear_playback(&mut self) -> Vec<SoundCategory> {
        self.mode = PlaybackMode::Exclusive;
        self.registry.stop_all(&mut self.engine)
    }

    pub fn set_volume(&mut self, level: f32) {
        self.engine.set_volume(level);
    }

    pub fn volume(&self) -> f32 {
        self.engine.output().level()
    }

    /// Arm the auto-stop for `minutes` (0 cancels).
    pub fn arm_timer(&mut self, minutes: u32, now: Instant) {
        self.timer.arm(minutes, now);
    }

    pub fn cancel_timer(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn combination_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Show or hide the combination panel. Hiding it drops pending picks.
    pub fn set_combination_panel(&mut self, open: bool) {
        if !open {
            self.selection.clear();
        }
        self.panel_open = open;
    }

    pub fn toggle_combination_panel(&mut self) -> bool {
        self.set_combination_panel(!self.panel_open);
        self.panel_open
    }

    pub fn selection(&self) -> &CombinationSelection {
        &self.selection
    }

    pub fn select_for_combination(&mut self, category: SoundCategory, selected: bool) {
        self.selection.set(category, selected);
    }

    /// Returns false for an unknown id.
    pub fn select_for_combination_by_id(&mut self, id: &str, selected: bool) -> bool {
        match id.parse::<SoundCategory>() {
            Ok(category) => {
                self.select_for_combination(category, selected);
                true
            }
            Err(e) => {
                log::warn!("[session] {}", e);
                false
            }
        }
    }

    pub fn cancel_combination(&mut self) {
        self.selection.clear();
    }

    /// Commit the pending picks built up with [`Self::select_for_combination`].
    pub fn commit_combination(&mut self) -> Result<Vec<SoundCategory>, SoundscapeError> {
        let selection = self.selection.clone();
        self.commit_selection(&selection)
    }

    /// Replace whatever is playing with exactly the selected categories.
    ///
    /// An empty selection changes nothing and reports
    /// [`SoundscapeError::EmptySelection`]. Categories whose graph fails to
    /// build are logged and left out; the rest still start.
    pub fn commit_selection(
        &mut self,
        selection: &CombinationSelection,
    ) -> Result<Vec<SoundCategory>, SoundscapeError> {
        let chosen = selection.selected();
        if chosen.is_empty() {
            log::warn!("[session] combination commit with nothing selected");
            return Err(SoundscapeError::EmptySelection);
        }

        self.clear_playback();
        let mut started = Vec::with_capacity(chosen.len());
        for category in chosen {
            match self.registry.start(category, &mut self.engine) {
                Ok(()) => started.push(category),
                Err(e) => log::error!("[session] {}", e),
            }
        }
        self.mode = PlaybackMode::Combination;
        self.selection.clear();
        self.panel_open = false;
        log::info!("[session] combination playing: {:?}", started);
        Ok(started)
    }

    /// Periodic re-entry point: runs due scheduler tasks and checks the
    /// timer. Bounded work, never blocks.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let registry = &self.registry;
        let tasks_run = self.engine.run_due_tasks(|c| registry.contains(c));
        let timer_expired = self.timer.poll(now) == TimerPoll::Expired;
        if timer_expired {
            log::info!("[timer] expired; stopping all sounds");
            self.stop_all();
        }
        TickReport {
            tasks_run,
            timer_expired,
        }
    }

    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        SessionSnapshot {
            active: self.registry.active(),
            mode: self.mode,
            volume: self.volume(),
            countdown: self.timer.remaining(now).map(format_remaining),
            combination_panel_open: self.panel_open,
            pending: self.selection.selected(),
        }
    }
}
