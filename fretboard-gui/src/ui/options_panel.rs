//! # Options Panel
//!
//! The row of root buttons (with the sharp modifier) and the row of
//! quality / interval buttons. The quality and interval buttons are
//! disabled until a root is selected.

use fretboard_core::{Degree, Letter, Quality, Selection};
use iced::widget::{button, column, row, text, Row};
use iced::{Alignment, Element, Length};

/// One button in the options panel.
struct OptionButton {
    label: &'static str,
    active: bool,
    /// `None` renders the button disabled.
    message: Option<crate::Message>,
}

/// Creates the options panel for the current selection.
pub fn create_options_panel(selection: &Selection) -> Element<'static, crate::Message> {
    let has_root = selection.root().is_some();

    let mut root_buttons = vec![OptionButton {
        label: "#",
        active: selection.is_sharp(),
        message: Some(crate::Message::SharpPressed),
    }];
    root_buttons.extend(Letter::ALL.iter().map(|&letter| OptionButton {
        label: letter.name(),
        active: selection.is_letter_selected(letter),
        message: Some(crate::Message::LetterPressed(letter)),
    }));

    let mut interval_buttons: Vec<OptionButton> = Quality::ALL
        .iter()
        .map(|&quality| OptionButton {
            label: quality.label(),
            active: selection.quality() == quality,
            message: has_root.then_some(crate::Message::QualityPressed(quality)),
        })
        .collect();
    interval_buttons.extend(Degree::ALL.iter().map(|&degree| OptionButton {
        label: degree.label(),
        active: selection.has_degree(degree),
        message: has_root.then_some(crate::Message::DegreePressed(degree)),
    }));

    column![button_row(root_buttons), button_row(interval_buttons)]
        .spacing(16)
        .padding(16)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

fn button_row(buttons: Vec<OptionButton>) -> Element<'static, crate::Message> {
    buttons
        .into_iter()
        .fold(Row::new().spacing(16), |row, config| row.push(make_button(config)))
        .align_y(Alignment::Center)
        .into()
}

/// Active buttons use the primary style, the rest the outlined secondary one.
fn make_button(config: OptionButton) -> Element<'static, crate::Message> {
    let style = if config.active {
        button::primary
    } else {
        button::secondary
    };
    button(text(config.label).size(14))
        .padding([6, 14])
        .style(style)
        .on_press_maybe(config.message)
        .into()
}

/// Summary line under the buttons, e.g. "Key: C   Notes: E G".
pub fn selection_summary(selection: &Selection) -> Element<'static, crate::Message> {
    let key = selection
        .root()
        .map(|root| format!("{} {}", root, selection.quality().label()))
        .unwrap_or_else(|| "--".to_string());
    let notes = if selection.visible_notes().is_empty() {
        "--".to_string()
    } else {
        selection
            .visible_notes()
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(" ")
    };
    row![
        text(format!("Key: {}", key)).size(16),
        text(format!("Notes: {}", notes)).size(16),
    ]
    .spacing(24)
    .into()
}
