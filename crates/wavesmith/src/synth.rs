//! Deterministic waveform synthesis.

use crate::osc::SynthSettings;

/// Generate a constant-pitch sample buffer.
///
/// The buffer holds `round(sample_rate * duration_seconds)` samples. Output
/// is a pure function of the inputs: the same frequency, duration, and
/// settings always produce bit-identical samples.
///
/// Callers are expected to pass a positive frequency and a non-negative
/// duration. A negative duration yields an empty buffer; a non-positive
/// frequency produces a buffer whose contents are not meaningful audio.
pub fn synthesize(frequency: f64, duration_seconds: f64, settings: &SynthSettings) -> Vec<f32> {
    let rate = settings.sample_rate as f64;
    // `as usize` saturates at zero for negative durations
    let sample_count = (rate * duration_seconds).round() as usize;

    let freq1 = settings.osc1.effective_frequency(frequency);
    let freq2 = settings
        .osc2
        .as_ref()
        .map(|osc| osc.effective_frequency(frequency));

    let mut samples = Vec::with_capacity(sample_count);
    for n in 0..sample_count {
        let t = n as f64 / rate;
        let mut value = settings.osc1.volume as f64 * settings.osc1.waveform.sample(freq1 * t);
        if let (Some(osc2), Some(freq2)) = (&settings.osc2, freq2) {
            value += osc2.volume as f64 * osc2.waveform.sample(freq2 * t);
        }
        samples.push(value as f32);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osc::Oscillator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_buffer_length() {
        let settings = SynthSettings::default();
        assert_eq!(synthesize(440.0, 0.5, &settings).len(), 22_050);
        assert_eq!(synthesize(440.0, 1.0, &settings).len(), 44_100);
        assert_eq!(synthesize(440.0, 0.0, &settings).len(), 0);
        // round, not truncate
        assert_eq!(synthesize(440.0, 0.00002, &settings).len(), 1);
    }

    #[test]
    fn test_negative_duration_is_empty() {
        let settings = SynthSettings::default();
        assert!(synthesize(440.0, -1.0, &settings).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let settings = SynthSettings::default();
        let a = synthesize(261.63, 0.5, &settings);
        let b = synthesize(261.63, 0.5, &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sine_shape() {
        let settings = SynthSettings::default();
        let samples = synthesize(441.0, 0.1, &settings);
        // starts at zero crossing
        assert!(samples[0].abs() < 1e-6);
        // 44100 / 441 = 100 samples per cycle, so sample 25 is the peak
        assert!((samples[25] - 1.0).abs() < 1e-3);
        // peak amplitude stays within full scale
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_volume_scaling() {
        let mut settings = SynthSettings::default();
        settings.osc1.volume = 0.5;
        let samples = synthesize(441.0, 0.1, &settings);
        assert!(samples.iter().all(|s| s.abs() <= 0.5 + 1e-6));
        assert!((samples[25] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_second_oscillator_mixes_in() {
        let mut settings = SynthSettings::default();
        settings.osc2 = Some(Oscillator {
            volume: 0.5,
            semitone_offset: 12.0,
            ..Oscillator::default()
        });
        let single = synthesize(220.0, 0.1, &SynthSettings::default());
        let mixed = synthesize(220.0, 0.1, &settings);
        assert_eq!(single.len(), mixed.len());
        assert_ne!(single, mixed);
    }
}
