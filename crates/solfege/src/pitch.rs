//! Pitch types and equal-tempered frequency mapping.

use serde::{Deserialize, Serialize};

use crate::parser;

/// Errors produced while parsing a single note token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum NoteError {
    #[error("empty note token")]
    Empty,

    #[error("expected a pitch letter A-G")]
    UnknownPitchLetter,

    #[error("missing or invalid octave digits")]
    InvalidOctave,

    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Convert to semitone offset from C (0-11)
    pub fn to_semitone(&self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    DoubleSharp,
    Flat,
    DoubleFlat,
}

impl Accidental {
    /// Semitone adjustment relative to the natural note
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }
}

/// A resolved pitch: note name, optional accidental, scientific octave.
///
/// Octave numbering follows scientific pitch notation where C4 is middle C
/// (MIDI note 60) and A4 is concert A (MIDI note 69, 440 Hz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Option<Accidental>,
    pub octave: i32,
}

impl Pitch {
    /// Parse a note token like `"C4"`, `"F#3"`, or `"Bb5"`.
    ///
    /// The whole token must be consumed; `"C4x"` is rejected rather than
    /// parsed as C4 with noise.
    pub fn from_token(token: &str) -> Result<Pitch, NoteError> {
        parser::parse_note_token(token)
    }

    /// MIDI note number (C4 = 60, A4 = 69). Not clamped to 0-127.
    pub fn midi_number(&self) -> i32 {
        let accidental = self.accidental.map(|a| a.offset()).unwrap_or(0);
        (self.octave + 1) * 12 + self.name.to_semitone() + accidental
    }

    /// Equal-tempered frequency in Hz, referenced to A4 = 440 Hz.
    pub fn frequency(&self) -> f64 {
        440.0 * f64::powf(2.0, (self.midi_number() - 69) as f64 / 12.0)
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.name {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        };
        let accidental = match self.accidental {
            None => "",
            Some(Accidental::Sharp) => "#",
            Some(Accidental::DoubleSharp) => "##",
            Some(Accidental::Flat) => "b",
            Some(Accidental::DoubleFlat) => "bb",
        };
        write!(f, "{}{}{}", name, accidental, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pitch(name: NoteName, accidental: Option<Accidental>, octave: i32) -> Pitch {
        Pitch {
            name,
            accidental,
            octave,
        }
    }

    #[test]
    fn test_midi_numbers() {
        assert_eq!(pitch(NoteName::C, None, 4).midi_number(), 60);
        assert_eq!(pitch(NoteName::A, None, 4).midi_number(), 69);
        assert_eq!(pitch(NoteName::C, Some(Accidental::Sharp), 4).midi_number(), 61);
        assert_eq!(pitch(NoteName::B, Some(Accidental::Flat), 3).midi_number(), 58);
        assert_eq!(pitch(NoteName::C, None, 0).midi_number(), 12);
    }

    #[test]
    fn test_concert_pitch() {
        let a4 = pitch(NoteName::A, None, 4);
        assert!((a4.frequency() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_tempered_frequencies() {
        // Reference values for the C major arpeggio used throughout the docs
        let cases = [
            (pitch(NoteName::C, None, 4), 261.63),
            (pitch(NoteName::E, None, 4), 329.63),
            (pitch(NoteName::G, None, 4), 392.00),
            (pitch(NoteName::C, None, 5), 523.25),
        ];
        for (p, expected) in cases {
            assert!(
                (p.frequency() - expected).abs() < 0.01,
                "{} expected {} got {}",
                p,
                expected,
                p.frequency()
            );
        }
    }

    #[test]
    fn test_octave_doubling() {
        let c4 = pitch(NoteName::C, None, 4);
        let c5 = pitch(NoteName::C, None, 5);
        assert!((c5.frequency() / c4.frequency() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_enharmonic_equivalence() {
        let c_sharp = pitch(NoteName::C, Some(Accidental::Sharp), 4);
        let d_flat = pitch(NoteName::D, Some(Accidental::Flat), 4);
        assert_eq!(c_sharp.midi_number(), d_flat.midi_number());
    }

    #[test]
    fn test_display_roundtrip() {
        for token in ["C4", "F#3", "Bb5", "A##2", "Ebb6"] {
            let p = Pitch::from_token(token).unwrap();
            assert_eq!(p.to_string(), token);
        }
    }
}
