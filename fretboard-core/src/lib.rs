// fretboard-core/src/lib.rs

//! The core logic for the interactive guitar fretboard.
//! This crate is responsible for the chromatic note alphabet, the fretboard
//! layout, interval resolution and the user's selection state. It is
//! completely headless and contains no GUI code.

pub mod config;
pub mod error;
pub mod fretboard;
pub mod interval;
pub mod note;
pub mod scale;
pub mod selection;

pub use error::{FretboardError, Result};
pub use fretboard::Fretboard;
pub use interval::{Degree, Quality};
pub use note::{Letter, Note};
pub use selection::{Selection, SelectionAction, SelectionChange, SelectionObserver};
