//! # Fretboard Layout Module
//!
//! Builds the grid of note names shown on the fretboard: one row per
//! string, one column per fret, with the open string note kept apart as
//! the row label.

use crate::error::{FretboardError, Result};
use crate::note::Note;
use crate::scale;

/// A validated fretboard: tuning, fret count and the generated note rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    frets: usize,
    open_notes: Vec<Note>,
    /// `strings[s][f]` is the note at fret `f + 1` of string `s`.
    strings: Vec<Vec<Note>>,
}

impl Fretboard {
    /// Creates a fretboard for the given fret count and tuning.
    ///
    /// # Arguments
    /// * `frets` - Number of fretted positions per string, at least 1
    /// * `tuning` - Open string note names, lowest string first
    ///
    /// # Returns
    /// * `Ok(Fretboard)` - The generated layout
    /// * `Err(FretboardError)` - Zero frets, empty tuning or unknown note
    pub fn new<S: AsRef<str>>(frets: usize, tuning: &[S]) -> Result<Self> {
        if frets == 0 {
            return Err(FretboardError::InvalidLength(frets));
        }
        if tuning.is_empty() {
            return Err(FretboardError::EmptyTuning);
        }

        let open_notes = tuning
            .iter()
            .map(|name| Note::parse(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let strings = open_notes
            .iter()
            .map(|&open| scale::generate_from(open, frets))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Built fretboard: {} strings x {} frets ({})",
            open_notes.len(),
            frets,
            open_notes.iter().map(Note::name).collect::<Vec<_>>().join(" ")
        );

        Ok(Self {
            frets,
            open_notes,
            strings,
        })
    }

    pub fn frets(&self) -> usize {
        self.frets
    }

    pub fn string_count(&self) -> usize {
        self.open_notes.len()
    }

    /// Open string notes, lowest string first.
    pub fn open_notes(&self) -> &[Note] {
        &self.open_notes
    }

    /// Fretted notes per string; index 0 of each row is fret 1.
    pub fn strings(&self) -> &[Vec<Note>] {
        &self.strings
    }

    /// Note at `fret` on `string`; fret 0 is the open string.
    pub fn note_at(&self, string: usize, fret: usize) -> Option<Note> {
        if fret == 0 {
            return self.open_notes.get(string).copied();
        }
        self.strings.get(string)?.get(fret - 1).copied()
    }
}
