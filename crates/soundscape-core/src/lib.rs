//! Procedural soundscape core: signal-graph builders, the playback registry,
//! the shared output stage, the sleep timer and the session coordinator.
//!
//! Nothing here depends on a concrete audio API; the browser front end plugs
//! WebAudio in through [`AudioPlatform`].

pub mod builders;
pub mod category;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handles;
pub mod music;
pub mod noise;
pub mod output;
pub mod platform;
pub mod recording;
pub mod registry;
pub mod session;
pub mod tasks;
pub mod timer;

pub use category::*;
pub use engine::Engine;
pub use error::*;
pub use handles::{LiveHandle, LiveHandleSet};
pub use platform::*;
pub use registry::PlaybackRegistry;
pub use session::*;
pub use timer::*;
