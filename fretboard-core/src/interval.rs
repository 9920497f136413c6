//! # Interval Module
//!
//! Maps a root note, a scale quality and the requested interval degrees to
//! the concrete notes that should be highlighted on the fretboard.

use std::fmt;
use std::str::FromStr;

use crate::error::{FretboardError, Result};
use crate::note::Note;

/// Scale quality; decides how far the third sits above the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Major,
    Minor,
}

impl Quality {
    pub const ALL: [Quality; 2] = [Quality::Major, Quality::Minor];

    pub fn name(&self) -> &'static str {
        match self {
            Quality::Major => "MAJOR",
            Quality::Minor => "MINOR",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Quality::Major => "Major",
            Quality::Minor => "Minor",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "MAJOR" => Ok(Quality::Major),
            "MINOR" => Ok(Quality::Minor),
            _ => Err(FretboardError::UnknownQuality(s.to_string())),
        }
    }
}

/// Interval degree that can be requested for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Third,
    Fifth,
}

impl Degree {
    pub const ALL: [Degree; 2] = [Degree::Third, Degree::Fifth];

    /// Semitones above the root under the given quality.
    pub fn semitones(&self, quality: Quality) -> usize {
        match (self, quality) {
            (Degree::Third, Quality::Major) => 4,
            (Degree::Third, Quality::Minor) => 3,
            (Degree::Fifth, _) => 7,
        }
    }

    /// Scale degree number ("3" / "5").
    pub fn label(&self) -> &'static str {
        match self {
            Degree::Third => "3",
            Degree::Fifth => "5",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Degree {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "3" => Ok(Degree::Third),
            "5" => Ok(Degree::Fifth),
            _ => Err(FretboardError::UnknownDegree(s.to_string())),
        }
    }
}

/// Resolves each requested degree to a note above `root`.
///
/// The result follows the order of `degrees` (the order they were selected
/// in), not numeric order. No root means nothing to highlight.
pub fn resolve_intervals(root: Option<Note>, quality: Quality, degrees: &[Degree]) -> Vec<Note> {
    let Some(root) = root else {
        return Vec::new();
    };
    degrees
        .iter()
        .map(|degree| root.transpose(degree.semitones(quality)))
        .collect()
}

/// String-facing form of [`resolve_intervals`].
///
/// An empty (or blank) `root` means no root is selected; any other name
/// must be in the alphabet.
pub fn resolve_interval_names(
    root: &str,
    quality: Quality,
    degrees: &[Degree],
) -> Result<Vec<&'static str>> {
    let root = if root.trim().is_empty() {
        None
    } else {
        Some(Note::parse(root)?)
    };
    Ok(resolve_intervals(root, quality, degrees)
        .iter()
        .map(Note::name)
        .collect())
}
