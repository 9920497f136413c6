//! # Main Display Module
//!
//! This module contains the main layout of the Fretboard application:
//! title, options panel, fretboard, and the config buttons.

use fretboard_core::Selection;
use iced::widget::{button, column, container, horizontal_space, row, text, Space};
use iced::{Alignment, Element, Length};

use super::options_panel::{create_options_panel, selection_summary};
use crate::widgets::fretboard_canvas::FretboardCanvas;

/// Creates the complete main application view.
pub fn create_main_view(
    data: &crate::AppDisplayData,
    selection: &Selection,
) -> Element<'static, crate::Message> {
    let title = text("Fretboard").size(28);

    let fretboard_panel = create_fretboard_panel(data);
    let footer = create_footer(data);

    let main_content = column![
        title,
        Space::with_height(10),
        create_options_panel(selection),
        selection_summary(selection),
        Space::with_height(10),
        fretboard_panel,
        Space::with_height(10),
        footer,
    ]
    .spacing(10)
    .padding(20)
    .width(Length::Fill);

    container(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Creates the fretboard panel from the fretboard's own copy of the selection.
fn create_fretboard_panel(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let canvas = FretboardCanvas::new(
        data.fretboard.clone(),
        data.selected_root,
        data.visible_notes.clone(),
    );

    container(canvas.view())
        .width(Length::Fill)
        .padding(15)
        .into()
}

/// Config status on the left, load/save buttons on the right.
fn create_footer(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let status = data.status.clone().unwrap_or_default();
    row![
        text(status).size(14),
        horizontal_space(),
        button(text("Load config").size(14))
            .padding([6, 10])
            .on_press(crate::Message::LoadConfig),
        button(text("Save config").size(14))
            .padding([6, 10])
            .on_press(crate::Message::SaveConfig),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
