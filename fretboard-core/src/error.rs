//! # Error Module
//!
//! Errors raised by the pure fretboard computations. Rendering has no
//! tolerance for undefined note names, so every bad input is reported
//! immediately instead of being wrapped into the alphabet.

use std::fmt;

pub type Result<T> = std::result::Result<T, FretboardError>;

/// Error from a fretboard computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FretboardError {
    /// The note name is not one of the 12 chromatic names.
    UnknownNote(String),
    /// A fret count or generation length of zero.
    InvalidLength(usize),
    /// A tuning without any strings.
    EmptyTuning,
    /// Quality name other than MAJOR / MINOR.
    UnknownQuality(String),
    /// Degree other than 3 / 5.
    UnknownDegree(String),
}

impl fmt::Display for FretboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FretboardError::UnknownNote(name) => write!(f, "unknown note: {:?}", name),
            FretboardError::InvalidLength(len) => {
                write!(f, "invalid length: {} (must be at least 1)", len)
            }
            FretboardError::EmptyTuning => write!(f, "tuning has no strings"),
            FretboardError::UnknownQuality(name) => write!(f, "unknown scale quality: {:?}", name),
            FretboardError::UnknownDegree(name) => write!(f, "unknown interval degree: {:?}", name),
        }
    }
}

impl std::error::Error for FretboardError {}
