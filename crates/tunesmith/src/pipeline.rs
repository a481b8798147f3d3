//! From Composer text to audio bytes.
//!
//! Melody tokens render first, then the harmony's expanded chord tokens.
//! Unparseable tokens are dropped with a warning and reported back to the
//! caller; a composition whose every token was dropped renders to empty
//! bytes rather than an error.

use anyhow::{Context, Result};
use solfege::{Durations, Pitch, Skipped};
use tunesconf::AudioConfig;
use wavesmith::{NoteEvent, SynthSettings};

use crate::composer::Composition;

/// Note events ready for rendering, plus everything that was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub events: Vec<NoteEvent>,
    pub skipped: Vec<Skipped>,
}

/// Map a composition's text onto renderable note events.
///
/// When rhythm is honored, the melody's nth token takes the nth parsed
/// beat value (beats × `note_duration` seconds) and falls back to the
/// fixed duration when the rhythm line runs short. Harmony notes always
/// use the fixed duration; the rhythm line is prompted against the melody
/// only.
pub fn arrange(composition: &Composition, audio: &AudioConfig) -> Arrangement {
    let mut events = Vec::new();
    let mut skipped = Vec::new();

    let durations = if audio.honor_rhythm {
        let durations = solfege::parse_durations(&composition.rhythm);
        skipped.extend(durations.skipped.iter().cloned());
        durations
    } else {
        Durations::default()
    };

    for (slot, token) in composition.melody.split_whitespace().enumerate() {
        match Pitch::from_token(token) {
            Ok(pitch) => {
                let seconds = durations
                    .beats
                    .get(slot)
                    .map(|beats| beats * audio.note_duration)
                    .unwrap_or(audio.note_duration);
                events.push(NoteEvent::new(pitch.frequency(), seconds));
            }
            Err(e) => skipped.push(Skipped::new(token, e)),
        }
    }

    let harmony = solfege::resolve_notes(solfege::expand_chords(&composition.harmony));
    events.extend(
        harmony
            .frequencies
            .iter()
            .map(|&frequency| NoteEvent::new(frequency, audio.note_duration)),
    );
    skipped.extend(harmony.skipped);

    Arrangement { events, skipped }
}

/// A rendered composition: WAV bytes plus drop diagnostics.
#[derive(Debug, Clone)]
pub struct RenderedComposition {
    pub wav: Vec<u8>,
    pub note_count: usize,
    pub skipped: Vec<Skipped>,
}

impl RenderedComposition {
    /// True when every token was dropped and no audio was produced.
    pub fn is_silent(&self) -> bool {
        self.wav.is_empty()
    }
}

/// Arrange and render a composition to WAV bytes.
pub fn render_composition(
    composition: &Composition,
    audio: &AudioConfig,
) -> Result<RenderedComposition> {
    let arrangement = arrange(composition, audio);

    for skip in &arrangement.skipped {
        tracing::warn!(token = %skip.token, reason = %skip.reason, "dropped unplayable token");
    }

    let settings = SynthSettings {
        sample_rate: audio.sample_rate,
        ..SynthSettings::default()
    };
    let wav = wavesmith::render(&arrangement.events, &settings).context("Failed to render audio")?;

    Ok(RenderedComposition {
        wav,
        note_count: arrangement.events.len(),
        skipped: arrangement.skipped,
    })
}
