//! Note sequence rendering and WAV encoding.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use serde::{Deserialize, Serialize};

use crate::osc::SynthSettings;
use crate::synth::synthesize;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode WAV: {0}")]
    Encode(#[from] hound::Error),
}

/// One note to render: a frequency held for a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub frequency: f64,
    pub seconds: f64,
}

impl NoteEvent {
    pub fn new(frequency: f64, seconds: f64) -> Self {
        NoteEvent { frequency, seconds }
    }
}

/// Render a note sequence to mono float WAV bytes.
///
/// Each event is synthesized with the configured oscillators and the
/// buffers are concatenated in input order. An empty sequence produces
/// zero bytes rather than an error so callers can degrade to "no audio".
pub fn render(events: &[NoteEvent], settings: &SynthSettings) -> Result<Vec<u8>, RenderError> {
    if events.is_empty() {
        tracing::warn!("no notes to render, producing empty audio");
        return Ok(Vec::new());
    }

    let total: usize = events
        .iter()
        .map(|e| (settings.sample_rate as f64 * e.seconds).round() as usize)
        .sum();
    let mut samples = Vec::with_capacity(total);
    for event in events {
        samples.extend(synthesize(event.frequency, event.seconds, settings));
    }

    encode_wav(&samples, settings.sample_rate)
}

/// Render every frequency at the same fixed per-note duration.
pub fn render_fixed(
    frequencies: &[f64],
    note_duration: f64,
    settings: &SynthSettings,
) -> Result<Vec<u8>, RenderError> {
    let events: Vec<NoteEvent> = frequencies
        .iter()
        .map(|&frequency| NoteEvent::new(frequency, note_duration))
        .collect();
    render(&events, settings)
}

/// Encode mono float samples as a WAV byte vector.
fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, RenderError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &sample in samples {
        writer.write_sample(sample.clamp(-1.0, 1.0))?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> (WavSpec, Vec<f32>) {
        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        let samples = reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        (spec, samples)
    }

    #[test]
    fn test_render_empty_is_empty_bytes() {
        let bytes = render(&[], &SynthSettings::default()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_render_fixed_sample_count() {
        let settings = SynthSettings::default();
        let frequencies = [261.63, 329.63, 392.00, 523.25];
        let bytes = render_fixed(&frequencies, 0.5, &settings).unwrap();

        let (spec, samples) = decode(&bytes);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.sample_format, SampleFormat::Float);
        assert_eq!(samples.len(), 4 * 22_050);
    }

    #[test]
    fn test_render_honors_per_note_durations() {
        let settings = SynthSettings::default();
        let events = [
            NoteEvent::new(261.63, 1.0),
            NoteEvent::new(392.00, 0.25),
        ];
        let bytes = render(&events, &settings).unwrap();

        let (_, samples) = decode(&bytes);
        assert_eq!(samples.len(), 44_100 + 11_025);
    }

    #[test]
    fn test_render_preserves_order() {
        let settings = SynthSettings::default();
        let events = [NoteEvent::new(220.0, 0.1), NoteEvent::new(440.0, 0.1)];
        let bytes = render(&events, &settings).unwrap();

        let (_, samples) = decode(&bytes);
        let first = synthesize(220.0, 0.1, &settings);
        let second = synthesize(440.0, 0.1, &settings);
        assert_eq!(&samples[..first.len()], &first[..]);
        assert_eq!(&samples[first.len()..], &second[..]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let settings = SynthSettings::default();
        let frequencies = [261.63, 329.63];
        let a = render_fixed(&frequencies, 0.5, &settings).unwrap();
        let b = render_fixed(&frequencies, 0.5, &settings).unwrap();
        assert_eq!(a, b);
    }
}
