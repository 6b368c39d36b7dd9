use crate::error::SoundscapeError;
use std::fmt;
use std::str::FromStr;

/// One procedurally generated sound type.
///
/// The set is closed: adding a category means adding a builder for it in
/// [`crate::builders`]. The string ids are what the UI layer sends back in
/// toggle intents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoundCategory {
    /// Flat-spectrum noise.
    White,
    /// Soft colored noise (pink spectrum).
    Pink,
    /// Deep colored noise (brown / random walk).
    Brown,
    Heartbeat,
    Ocean,
    Rain,
    /// Ambient wind over snow.
    Snow,
    Forest,
    Lullaby,
}

impl SoundCategory {
    pub const ALL: [SoundCategory; 9] = [
        SoundCategory::White,
        SoundCategory::Pink,
        SoundCategory::Brown,
        SoundCategory::Heartbeat,
        SoundCategory::Ocean,
        SoundCategory::Rain,
        SoundCategory::Snow,
        SoundCategory::Forest,
        SoundCategory::Lullaby,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn id(self) -> &'static str {
        match self {
            SoundCategory::White => "white",
            SoundCategory::Pink => "pink",
            SoundCategory::Brown => "brown",
            SoundCategory::Heartbeat => "heartbeat",
            SoundCategory::Ocean => "ocean",
            SoundCategory::Rain => "rain",
            SoundCategory::Snow => "snow",
            SoundCategory::Forest => "forest",
            SoundCategory::Lullaby => "lullaby",
        }
    }

    /// Human-readable name for status text.
    pub fn label(self) -> &'static str {
        match self {
            SoundCategory::White => "White noise",
            SoundCategory::Pink => "Soft noise",
            SoundCategory::Brown => "Deep noise",
            SoundCategory::Heartbeat => "Heartbeat",
            SoundCategory::Ocean => "Ocean waves",
            SoundCategory::Rain => "Rain",
            SoundCategory::Snow => "Snow wind",
            SoundCategory::Forest => "Forest",
            SoundCategory::Lullaby => "Lullaby",
        }
    }

    /// Position in [`SoundCategory::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SoundCategory {
    type Err = SoundscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SoundCategory::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SoundscapeError::UnknownCategory(s.to_string()))
    }
}
