//! # Chromatic Scale Module
//!
//! Generates the chromatic run of notes along one string.

use crate::error::{FretboardError, Result};
use crate::note::Note;

/// Generates `length` chromatic notes starting one semitone above `starting_note`.
///
/// The starting note itself is the open string and is labelled separately,
/// so the returned sequence covers frets 1 through `length`.
///
/// # Arguments
/// * `starting_note` - Open string note name (case-insensitive, e.g. "e", "C#")
/// * `length` - Number of notes to generate, at least 1
///
/// # Returns
/// * `Ok(notes)` - Exactly `length` notes
/// * `Err(FretboardError)` - Unknown starting note or zero length
pub fn generate(starting_note: &str, length: usize) -> Result<Vec<Note>> {
    let start = Note::parse(starting_note)?;
    generate_from(start, length)
}

/// Same as [`generate`] for an already parsed starting note.
pub fn generate_from(start: Note, length: usize) -> Result<Vec<Note>> {
    if length == 0 {
        return Err(FretboardError::InvalidLength(length));
    }
    Ok((0..length).map(|i| start.transpose(i + 1)).collect())
}

/// Note names of a generated sequence, for hosts that work with strings.
pub fn names(notes: &[Note]) -> Vec<&'static str> {
    notes.iter().map(Note::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_octave_from_c() {
        let notes = generate("C", 12).unwrap();
        assert_eq!(
            names(&notes),
            vec!["C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", "C"]
        );
    }

    #[test]
    fn wraps_past_b() {
        assert_eq!(names(&generate("B", 3).unwrap()), vec!["C", "C#", "D"]);
    }

    #[test]
    fn lower_case_start_is_accepted() {
        assert_eq!(generate("e", 1).unwrap(), vec![Note::F]);
    }

    #[test]
    fn always_returns_requested_length() {
        for note in Note::ALL {
            for length in [1, 5, 12, 13, 24, 30] {
                let notes = generate_from(note, length).unwrap();
                assert_eq!(notes.len(), length);
                assert_eq!(notes[0], note.transpose(1));
            }
        }
    }

    #[test]
    fn rejects_unknown_note() {
        assert_eq!(
            generate("X", 4),
            Err(FretboardError::UnknownNote("X".to_string()))
        );
    }

    #[test]
    fn rejects_zero_length() {
        assert_eq!(generate("C", 0), Err(FretboardError::InvalidLength(0)));
    }
}
