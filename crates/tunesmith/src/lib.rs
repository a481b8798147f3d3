//! Tunesmith turns a free-text musical idea into an audible composition.
//!
//! A chat model produces melody, harmony, rhythm, and a style summary;
//! the melody and harmony text is resolved to frequencies (solfege) and
//! rendered to mono float WAV bytes (wavesmith). Malformed model output
//! degrades to fewer notes, possibly silence, never a crash.

pub mod composer;
pub mod model;
pub mod pipeline;

pub use composer::{Composer, Composition};
pub use model::{ChatModel, GroqChat, ModelError};
pub use pipeline::{arrange, render_composition, Arrangement, RenderedComposition};
