//! # Widgets Module
//!
//! Canvas widgets drawn by the Fretboard application.

pub mod fretboard_canvas;
