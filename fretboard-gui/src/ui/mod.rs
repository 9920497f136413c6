//! # UI Module
//!
//! This module contains the layout and controls of the Fretboard application.

pub mod main_display;
pub mod options_panel;
