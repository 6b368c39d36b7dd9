use crate::constants::LULLABY_TEMPO_BPM;

/// One step of the lullaby: a pitch (or rest) held for a number of beats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub midi: Option<u8>,
    pub beats: f32,
}

const fn n(midi: u8, beats: f32) -> Note {
    Note {
        midi: Some(midi),
        beats,
    }
}

const fn rest(beats: f32) -> Note {
    Note { midi: None, beats }
}

// Brahms' cradle song, first strain, in C major.
pub const LULLABY: &[Note] = &[
    n(64, 0.5),
    n(64, 0.5),
    n(67, 2.0),
    n(64, 0.5),
    n(64, 0.5),
    n(67, 2.0),
    n(64, 0.5),
    n(67, 0.5),
    n(72, 1.0),
    n(71, 1.5),
    n(69, 0.5),
    n(69, 1.0),
    n(67, 1.0),
    n(62, 0.5),
    n(64, 0.5),
    n(65, 1.0),
    n(62, 1.0),
    n(62, 0.5),
    n(64, 0.5),
    n(65, 2.0),
    n(62, 0.5),
    n(65, 0.5),
    n(71, 0.5),
    n(69, 0.5),
    n(67, 1.0),
    n(71, 1.0),
    n(72, 2.0),
    rest(1.0),
];

impl Note {
    pub fn frequency_hz(&self) -> Option<f32> {
        self.midi.map(|m| midi_to_hz(m as f32))
    }

    pub fn duration_sec(&self) -> f64 {
        (self.beats * 60.0 / LULLABY_TEMPO_BPM) as f64
    }
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midi_to_hz_matches_a4_and_octave() {
        assert!((midi_to_hz(69.0) - 440.0).abs() < 1e-4);
        assert!((midi_to_hz(81.0) / midi_to_hz(69.0) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn lullaby_notes_are_playable() {
        assert!(!LULLABY.is_empty());
        for note in LULLABY {
            assert!(note.duration_sec() > 0.0);
            if let Some(f) = note.frequency_hz() {
                assert!((200.0..1000.0).contains(&f), "note out of range: {f}");
            }
        }
    }
}
