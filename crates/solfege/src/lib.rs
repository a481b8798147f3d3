//! Note token parsing and equal-tempered pitch resolution.
//!
//! This crate turns the note text produced by a language model into
//! frequencies. Tokens follow scientific pitch notation (`"C4"`, `"F#3"`,
//! `"Bb5"`); chords are hyphen-joined tokens (`"C4-E4-G4"`). Malformed
//! tokens never abort a batch: resolution collects what parsed and reports
//! what did not.
//!
//! # Example
//!
//! ```
//! use solfege::{expand_chords, resolve_notes};
//!
//! let resolved = resolve_notes(["C4", "E4", "G4"]);
//! assert_eq!(resolved.frequencies.len(), 3);
//!
//! let tokens = expand_chords("C4-E4-G4 F4-A4-C5");
//! assert_eq!(tokens.len(), 6);
//! ```

mod parser;
mod pitch;
mod resolve;

pub use pitch::{Accidental, NoteError, NoteName, Pitch};
pub use resolve::{expand_chords, parse_durations, resolve_notes, Durations, Resolved, Skipped};
