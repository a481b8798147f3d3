//! Oscillator shapes and synthesizer settings.

use serde::{Deserialize, Serialize};

/// Oscillator waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Saw,
}

impl Waveform {
    /// Amplitude at the given phase, measured in cycles.
    ///
    /// All shapes span the full -1.0 to 1.0 range before volume scaling.
    pub fn sample(&self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => (phase * std::f64::consts::TAU).sin(),
            Waveform::Square => {
                if phase.fract() < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (phase.fract() - 0.5).abs(),
            Waveform::Saw => 2.0 * phase.fract() - 1.0,
        }
    }
}

/// A single oscillator voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Waveform shape.
    /// Default: sine
    #[serde(default)]
    pub waveform: Waveform,

    /// Peak amplitude, 1.0 = full scale.
    /// Default: 1.0
    #[serde(default = "Oscillator::default_volume")]
    pub volume: f32,

    /// Pitch offset in semitones relative to the requested frequency.
    /// Default: 0.0
    #[serde(default)]
    pub semitone_offset: f64,
}

impl Oscillator {
    fn default_volume() -> f32 {
        1.0
    }

    /// Frequency this oscillator plays for a requested base frequency.
    pub fn effective_frequency(&self, frequency: f64) -> f64 {
        frequency * f64::powf(2.0, self.semitone_offset / 12.0)
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Oscillator {
            waveform: Waveform::Sine,
            volume: Self::default_volume(),
            semitone_offset: 0.0,
        }
    }
}

/// Synthesizer configuration: sample rate plus one or two oscillators.
///
/// The second oscillator is mixed additively when present and disabled by
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthSettings {
    /// Output sample rate in Hz.
    /// Default: 44100
    #[serde(default = "SynthSettings::default_sample_rate")]
    pub sample_rate: u32,

    /// Primary oscillator.
    #[serde(default)]
    pub osc1: Oscillator,

    /// Optional second oscillator, mixed on top of the first.
    /// Default: none
    #[serde(default)]
    pub osc2: Option<Oscillator>,
}

impl SynthSettings {
    fn default_sample_rate() -> u32 {
        44_100
    }
}

impl Default for SynthSettings {
    fn default() -> Self {
        SynthSettings {
            sample_rate: Self::default_sample_rate(),
            osc1: Oscillator::default(),
            osc2: None,
        }
    }
}
