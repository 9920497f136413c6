//! # Fretboard Canvas Widget
//!
//! Draws the fretboard: open string labels on the left, one row of note
//! circles per string (lowest string at the bottom), and fret numbers
//! underneath.
//!
//! ## Highlighting
//! - With no root selected every note is shown at full strength
//! - Otherwise only the root and the visible interval notes are; the rest
//!   are dimmed
//! - The first visible interval note is filled blue, the second green

use fretboard_core::{Fretboard, Note};
use iced::alignment;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::widget::container;
use iced::{mouse, Color, Element, Pixels, Point, Rectangle, Renderer, Theme};

/// Height of one string row in pixels.
const ROW_HEIGHT: f32 = 40.0;
/// Opacity applied to notes outside the current selection.
const DIMMED_ALPHA: f32 = 0.2;

const NEUTRAL_FILL: Color = Color::from_rgb(0.118, 0.161, 0.231); // slate
const FIRST_INTERVAL_FILL: Color = Color::from_rgb(0.145, 0.388, 0.922); // blue
const SECOND_INTERVAL_FILL: Color = Color::from_rgb(0.082, 0.502, 0.239); // green
const STRING_COLOR: Color = Color::from_rgb(0.886, 0.910, 0.941);

/// Fill used for a note position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Neutral,
    FirstInterval,
    SecondInterval,
}

/// How a single note position is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStyle {
    pub highlight: Highlight,
    pub dimmed: bool,
}

/// Decides the style of `note` given the fretboard's root and visible notes.
pub fn note_style(note: Note, root: Option<Note>, visible_notes: &[Note]) -> NoteStyle {
    let position = visible_notes.iter().position(|&n| n == note);
    let visible = root.is_none() || root == Some(note) || position.is_some();
    let highlight = match position {
        Some(0) => Highlight::FirstInterval,
        Some(1) => Highlight::SecondInterval,
        _ => Highlight::Neutral,
    };
    NoteStyle {
        highlight,
        dimmed: !visible,
    }
}

impl NoteStyle {
    fn fill(&self) -> Color {
        let color = match self.highlight {
            Highlight::Neutral => NEUTRAL_FILL,
            Highlight::FirstInterval => FIRST_INTERVAL_FILL,
            Highlight::SecondInterval => SECOND_INTERVAL_FILL,
        };
        if self.dimmed {
            Color { a: DIMMED_ALPHA, ..color }
        } else {
            color
        }
    }

    fn text_color(&self) -> Color {
        if self.dimmed {
            Color { a: DIMMED_ALPHA, ..Color::WHITE }
        } else {
            Color::WHITE
        }
    }
}

/// Fretboard widget drawn from the fretboard's own copy of the selection.
#[derive(Debug, Clone)]
pub struct FretboardCanvas {
    fretboard: Fretboard,
    root: Option<Note>,
    visible_notes: Vec<Note>,
}

impl FretboardCanvas {
    pub fn new(fretboard: Fretboard, root: Option<Note>, visible_notes: Vec<Note>) -> Self {
        Self {
            fretboard,
            root,
            visible_notes,
        }
    }

    /// Creates the view element, consuming the widget.
    pub fn view(self) -> Element<'static, crate::Message> {
        let height = ROW_HEIGHT * (self.fretboard.string_count() + 1) as f32;
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(height)),
        )
        .into()
    }
}

/// Fret numbers drawn under the board.
///
/// `frets` counts fretted positions only, so the labels run 1..=frets with
/// no extra column past the last fret. The open string column is unlabelled.
pub fn fret_numbers(frets: usize) -> std::ops::RangeInclusive<usize> {
    1..=frets
}

fn note_label(frame: &mut canvas::Frame, content: &str, center: Point, color: Color, size: f32) {
    frame.fill_text(canvas::Text {
        content: content.to_string(),
        position: center,
        color,
        size: Pixels(size),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}

impl<Message> canvas::Program<Message> for FretboardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let strings = self.fretboard.string_count();
        let frets = self.fretboard.frets();
        // Column 0 holds the open string labels.
        let cell_width = bounds.width / (frets + 1) as f32;
        let cell_height = bounds.height / (strings + 1) as f32;
        let radius = (cell_width.min(cell_height) * 0.35).max(4.0);
        let text_size = (radius * 0.8).clamp(8.0, 14.0);
        let board_height = cell_height * strings as f32;

        // Fret wires, including the nut after the open string column
        for fret in 0..=frets {
            let x = cell_width * (fret + 1) as f32;
            let wire = Path::line(Point::new(x, 0.0), Point::new(x, board_height));
            frame.stroke(
                &wire,
                Stroke::default()
                    .with_width(if fret == 0 { 3.0 } else { 1.0 })
                    .with_color(Color::WHITE),
            );
        }

        for (string, (open, row)) in self
            .fretboard
            .open_notes()
            .iter()
            .zip(self.fretboard.strings())
            .enumerate()
        {
            // Lowest string at the bottom
            let y = cell_height * (strings - 1 - string) as f32 + cell_height / 2.0;

            let line = Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(
                &line,
                Stroke::default().with_width(1.0).with_color(STRING_COLOR),
            );

            let open_center = Point::new(cell_width / 2.0, y);
            frame.fill(&Path::circle(open_center, radius), NEUTRAL_FILL);
            note_label(&mut frame, open.name(), open_center, Color::WHITE, text_size);

            for (i, note) in row.iter().enumerate() {
                let center = Point::new(cell_width * (i + 1) as f32 + cell_width / 2.0, y);
                let style = note_style(*note, self.root, &self.visible_notes);
                frame.fill(&Path::circle(center, radius), style.fill());
                note_label(&mut frame, note.name(), center, style.text_color(), text_size);
            }
        }

        let number_y = board_height + cell_height / 2.0;
        for fret in fret_numbers(frets) {
            let center = Point::new(cell_width * fret as f32 + cell_width / 2.0, number_y);
            note_label(&mut frame, &fret.to_string(), center, Color::WHITE, text_size);
        }

        vec![frame.into_geometry()]
    }
}
