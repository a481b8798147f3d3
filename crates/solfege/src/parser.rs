//! Note token parsing using winnow combinators.
//!
//! The grammar is the one the melody prompts ask the model for: an
//! uppercase pitch letter, an optional accidental, and a one or two digit
//! octave, with nothing left over. Anything else is a parse error that the
//! resolver turns into a skip.

use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::pitch::{Accidental, NoteError, NoteName, Pitch};

type PResult<T> = winnow::ModalResult<T>;

/// Parse a pitch letter (uppercase A-G).
fn parse_letter(input: &mut &str) -> PResult<NoteName> {
    let c = one_of(['C', 'D', 'E', 'F', 'G', 'A', 'B']).parse_next(input)?;
    match c {
        'C' => Ok(NoteName::C),
        'D' => Ok(NoteName::D),
        'E' => Ok(NoteName::E),
        'F' => Ok(NoteName::F),
        'G' => Ok(NoteName::G),
        'A' => Ok(NoteName::A),
        'B' => Ok(NoteName::B),
        _ => unreachable!(), // one_of already validated the character
    }
}

/// Parse an accidental (#, ##, b, bb). Longest form first.
fn parse_accidental(input: &mut &str) -> PResult<Accidental> {
    alt((
        "##".map(|_| Accidental::DoubleSharp),
        "#".map(|_| Accidental::Sharp),
        "bb".map(|_| Accidental::DoubleFlat),
        "b".map(|_| Accidental::Flat),
    ))
    .parse_next(input)
}

/// Parse a one or two digit octave number.
fn parse_octave(input: &mut &str) -> PResult<i32> {
    let digits: &str = take_while(1..=2, |c: char| c.is_ascii_digit()).parse_next(input)?;
    // one or two ascii digits always fit in an i32
    Ok(digits.parse().unwrap_or(0))
}

/// Parse a complete note token, requiring the full input to be consumed.
pub(crate) fn parse_note_token(token: &str) -> Result<Pitch, NoteError> {
    if token.is_empty() {
        return Err(NoteError::Empty);
    }

    let mut input = token;
    let name = parse_letter(&mut input).map_err(|_| NoteError::UnknownPitchLetter)?;
    let accidental = opt(parse_accidental).parse_next(&mut input).ok().flatten();
    let octave = parse_octave(&mut input).map_err(|_| NoteError::InvalidOctave)?;

    if !input.is_empty() {
        return Err(NoteError::TrailingInput(input.to_string()));
    }

    Ok(Pitch {
        name,
        accidental,
        octave,
    })
}
