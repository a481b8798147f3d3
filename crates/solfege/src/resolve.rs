//! Skip-and-continue resolution of model-produced text.
//!
//! Language models are asked for strict note/duration grammars but are free
//! to ignore the request, so every resolver here collects the values it
//! could make sense of alongside the tokens it could not, instead of
//! failing the whole batch on the first bad token.

use serde::{Deserialize, Serialize};

use crate::pitch::Pitch;

/// A token that was dropped during resolution, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    pub token: String,
    pub reason: String,
}

impl Skipped {
    pub fn new(token: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Skipped {
            token: token.into(),
            reason: reason.to_string(),
        }
    }
}

/// Frequencies resolved from a token list, plus the tokens that were dropped.
///
/// The frequency list preserves input order but may be shorter than the
/// input: callers must not assume positional correspondence with the
/// original tokens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resolved {
    pub frequencies: Vec<f64>,
    pub skipped: Vec<Skipped>,
}

impl Resolved {
    /// True when no token survived resolution.
    pub fn is_silent(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Resolve note tokens to frequencies, dropping malformed tokens.
pub fn resolve_notes<I>(tokens: I) -> Resolved
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut resolved = Resolved::default();
    for token in tokens {
        let token = token.as_ref();
        match Pitch::from_token(token) {
            Ok(pitch) => resolved.frequencies.push(pitch.frequency()),
            Err(e) => resolved.skipped.push(Skipped::new(token, e)),
        }
    }
    resolved
}

/// Split whitespace-separated chords into a flat note-token list.
///
/// `"C4-E4-G4 F4"` becomes `["C4", "E4", "G4", "F4"]`. Chord grouping is
/// not preserved: downstream rendering plays the notes in sequence.
pub fn expand_chords(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .flat_map(|chord| chord.split('-'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Beat durations parsed from a rhythm line, plus the values dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Durations {
    pub beats: Vec<f64>,
    pub skipped: Vec<Skipped>,
}

/// Parse whitespace-separated beat values, dropping anything that is not a
/// finite positive number.
pub fn parse_durations(text: &str) -> Durations {
    let mut durations = Durations::default();
    for token in text.split_whitespace() {
        match token.parse::<f64>() {
            Ok(beats) if beats.is_finite() && beats > 0.0 => durations.beats.push(beats),
            Ok(_) => durations
                .skipped
                .push(Skipped::new(token, "beat value must be positive")),
            Err(e) => durations.skipped.push(Skipped::new(token, e)),
        }
    }
    durations
}
