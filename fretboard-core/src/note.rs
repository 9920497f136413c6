//! # Note Alphabet Module
//!
//! The fixed 12-note chromatic alphabet every other module works against.
//!
//! ## Features
//! - Case-insensitive note name parsing
//! - Semitone transposition that wraps modulo 12
//! - Natural letters (the root buttons) and their sharp forms

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FretboardError, Result};

/// Number of semitones in the chromatic alphabet.
pub const SEMITONES: usize = 12;

/// One of the 12 chromatic pitch classes, in alphabet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Note {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

/// Static map for note name to alphabet index lookups.
///
/// Keys are upper-case, so lookups upper-case the input first.
static NOTE_MAP: Lazy<BTreeMap<&'static str, usize>> = Lazy::new(|| {
    Note::ALL
        .iter()
        .enumerate()
        .map(|(i, note)| (note.name(), i))
        .collect()
});

impl Note {
    /// The alphabet in order: C, C#, D, D#, E, F, F#, G, G#, A, A#, B.
    pub const ALL: [Note; SEMITONES] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }

    /// Position of this note in the alphabet (C = 0 … B = 11).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Note at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Note {
        Note::ALL[index % SEMITONES]
    }

    /// Looks a note up by name, ignoring case ("c#" and "C#" are the same).
    ///
    /// # Returns
    /// * `Ok(note)` - The matching note
    /// * `Err(FretboardError::UnknownNote)` - The name is not in the alphabet
    pub fn parse(name: &str) -> Result<Note> {
        NOTE_MAP
            .get(name.trim().to_uppercase().as_str())
            .map(|&i| Note::ALL[i])
            .ok_or_else(|| FretboardError::UnknownNote(name.to_string()))
    }

    /// The note `semitones` above this one. Total for any `semitones`.
    pub fn transpose(&self, semitones: usize) -> Note {
        Note::from_index(self.index() + semitones % SEMITONES)
    }

    pub fn is_sharp(&self) -> bool {
        matches!(self, Note::Cs | Note::Ds | Note::Fs | Note::Gs | Note::As)
    }

    /// The natural letter this note is spelled with (C# → C).
    pub fn letter(&self) -> Letter {
        match self {
            Note::C | Note::Cs => Letter::C,
            Note::D | Note::Ds => Letter::D,
            Note::E => Letter::E,
            Note::F | Note::Fs => Letter::F,
            Note::G | Note::Gs => Letter::G,
            Note::A | Note::As => Letter::A,
            Note::B => Letter::B,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

/// A natural note letter, as shown on the root buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn natural(&self) -> Note {
        match self {
            Letter::C => Note::C,
            Letter::D => Note::D,
            Letter::E => Note::E,
            Letter::F => Note::F,
            Letter::G => Note::G,
            Letter::A => Note::A,
            Letter::B => Note::B,
        }
    }

    /// The sharp form of this letter; E and B have none in this alphabet.
    pub fn sharp(&self) -> Option<Note> {
        match self {
            Letter::E | Letter::B => None,
            _ => Some(self.natural().transpose(1)),
        }
    }

    /// Sharp form when `sharp` is set and one exists, the natural otherwise.
    pub fn with_sharp(&self, sharp: bool) -> Note {
        if sharp {
            self.sharp().unwrap_or_else(|| self.natural())
        } else {
            self.natural()
        }
    }

    pub fn name(&self) -> &'static str {
        self.natural().name()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
