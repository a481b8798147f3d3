//! Waveform synthesis and WAV rendering for composed note sequences.
//!
//! Frequencies go in, mono 32-bit float WAV bytes come out. Synthesis is a
//! pure function of the inputs and the oscillator settings, so identical
//! compositions render to byte-identical audio.
//!
//! # Example
//!
//! ```
//! use wavesmith::{render_fixed, SynthSettings};
//!
//! let settings = SynthSettings::default();
//! let wav = render_fixed(&[440.0], 0.5, &settings).unwrap();
//! assert!(!wav.is_empty());
//! ```

mod osc;
mod render;
mod synth;

pub use osc::{Oscillator, SynthSettings, Waveform};
pub use render::{render, render_fixed, NoteEvent, RenderError};
pub use synth::synthesize;
