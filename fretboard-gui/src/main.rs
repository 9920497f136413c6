//! # Fretboard - Interactive Guitar Fretboard GUI
//!
//! This module contains the main GUI application for the fretboard viewer.
//! It shows every note of a configurable tuning across the neck and
//! highlights a chosen key together with its third and fifth.
//!
//! ## Architecture
//! - **Options panel**: owns the `Selection` and turns button presses into
//!   `SelectionAction`s
//! - **Fretboard**: keeps its own copy of the root and visible notes, kept in
//!   sync through the `SelectionObserver` notifications
//! - **Config**: fret count and tuning loaded from a JSON file

mod ui;
mod widgets;

use fretboard_core::{
    config::{self, FretboardConfig},
    Degree, Fretboard, Letter, Note, Quality, Selection, SelectionAction, SelectionObserver,
};
use iced::{Element, Theme};
use std::path::PathBuf;
use ui::main_display::create_main_view;

/// Config file used when `FRETBOARD_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "fretboard.json";

/// Main entry point for the Fretboard application.
pub fn main() -> iced::Result {
    env_logger::init();
    log::info!("Starting Fretboard application...");
    let result = iced::application("Fretboard", FretboardApp::update, FretboardApp::view)
        .theme(FretboardApp::theme)
        .run();
    log::info!("Application finished with result: {:?}", result);
    result
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Options panel
    LetterPressed(Letter),    // Root letter button
    SharpPressed,             // Sharp modifier button
    QualityPressed(Quality),  // Major / minor button
    DegreePressed(Degree),    // 3 / 5 button

    // Config file
    LoadConfig,
    SaveConfig,
}

/// What the fretboard itself needs to draw.
///
/// Root and visible notes are the fretboard's own copies, updated only
/// through the selection notifications.
#[derive(Debug, Clone)]
pub struct AppDisplayData {
    pub fretboard: Fretboard,
    pub selected_root: Option<Note>,
    pub visible_notes: Vec<Note>,
    /// Last config load/save outcome shown under the fretboard.
    pub status: Option<String>,
}

impl SelectionObserver for AppDisplayData {
    fn on_root_change(&mut self, root: Option<Note>) {
        self.selected_root = root;
    }

    fn on_visible_notes_change(&mut self, notes: &[Note]) {
        log::debug!("Visible notes changed: {:?}", notes);
        self.visible_notes = notes.to_vec();
    }
}

/// Main application state.
#[derive(Debug)]
struct FretboardApp {
    config_path: PathBuf,
    config: FretboardConfig,
    selection: Selection,
    display_data: AppDisplayData,
}

impl Default for FretboardApp {
    fn default() -> Self {
        let config_path = std::env::var_os("FRETBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = if config_path.exists() {
            match config::load_config(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Falling back to default config: {:#}", e);
                    FretboardConfig::default()
                }
            }
        } else {
            log::info!("No config at {}, using defaults", config_path.display());
            FretboardConfig::default()
        };
        let (config, fretboard) = validated(config);

        Self {
            config_path,
            config,
            selection: Selection::new(),
            display_data: AppDisplayData {
                fretboard,
                selected_root: None,
                visible_notes: Vec::new(),
                status: None,
            },
        }
    }
}

/// Pairs a config with its fretboard, replacing an invalid config with the default.
fn validated(config: FretboardConfig) -> (FretboardConfig, Fretboard) {
    match config.fretboard() {
        Ok(fretboard) => (config, fretboard),
        Err(e) => {
            log::error!("Invalid fretboard config {:?}: {}", config, e);
            let config = FretboardConfig::default();
            // The default config is always valid.
            let fretboard = config.fretboard().expect("default fretboard config");
            (config, fretboard)
        }
    }
}

impl FretboardApp {
    /// Handles application state updates based on incoming messages.
    fn update(&mut self, message: Message) {
        log::debug!("Received message: {:?}", message);

        let action = match message {
            Message::LetterPressed(letter) => SelectionAction::SelectLetter(letter),
            Message::SharpPressed => SelectionAction::ToggleSharp,
            Message::QualityPressed(quality) => SelectionAction::SetQuality(quality),
            Message::DegreePressed(degree) => SelectionAction::ToggleDegree(degree),
            Message::LoadConfig => {
                self.load_config();
                return;
            }
            Message::SaveConfig => {
                self.save_config();
                return;
            }
        };
        self.selection.dispatch(action, &mut self.display_data);
    }

    fn load_config(&mut self) {
        match config::load_config(&self.config_path) {
            Ok(config) => {
                let (config, fretboard) = validated(config);
                self.config = config;
                self.display_data.fretboard = fretboard;
                self.display_data.status =
                    Some(format!("Loaded {}", self.config_path.display()));
            }
            Err(e) => {
                log::error!("Error loading config: {:#}", e);
                self.display_data.status = Some(format!("Load failed: {}", e));
            }
        }
    }

    fn save_config(&mut self) {
        match config::save_config(&self.config, &self.config_path) {
            Ok(()) => {
                self.display_data.status = Some(format!("Saved {}", self.config_path.display()));
            }
            Err(e) => {
                log::error!("Error saving config: {:#}", e);
                self.display_data.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Renders the main application interface.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.display_data, &self.selection)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> FretboardApp {
        let config = FretboardConfig::default();
        let fretboard = config.fretboard().unwrap();
        FretboardApp {
            config_path: std::env::temp_dir().join("fretboard-gui-test.json"),
            config,
            selection: Selection::new(),
            display_data: AppDisplayData {
                fretboard,
                selected_root: None,
                visible_notes: Vec::new(),
                status: None,
            },
        }
    }

    #[test]
    fn button_presses_reach_the_fretboard() {
        let mut app = app();
        app.update(Message::LetterPressed(Letter::C));
        app.update(Message::DegreePressed(Degree::Third));
        app.update(Message::DegreePressed(Degree::Fifth));
        assert_eq!(app.display_data.selected_root, Some(Note::C));
        assert_eq!(app.display_data.visible_notes, vec![Note::E, Note::G]);

        app.update(Message::QualityPressed(Quality::Minor));
        assert_eq!(app.display_data.visible_notes, vec![Note::Ds, Note::G]);

        app.update(Message::LetterPressed(Letter::C));
        assert_eq!(app.display_data.selected_root, None);
        assert!(app.display_data.visible_notes.is_empty());
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let (config, fretboard) = validated(FretboardConfig {
            frets: 0,
            tuning: vec!["E".into()],
        });
        assert_eq!(config, FretboardConfig::default());
        assert_eq!(fretboard.string_count(), 6);
    }

    #[test]
    fn failed_load_keeps_current_fretboard() {
        let mut app = app();
        app.config_path = std::env::temp_dir().join("fretboard-gui-missing-config.json");
        app.update(Message::LoadConfig);
        assert_eq!(app.display_data.fretboard.frets(), 12);
        assert!(app
            .display_data
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Load failed")));
    }
}
