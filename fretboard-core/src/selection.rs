//! # Selection Module
//!
//! The user's current choice of root, scale quality, interval degrees and
//! sharp modifier, plus the notes derived from them.
//!
//! Every transition recomputes the visible notes from scratch. Observers are
//! told about a new visible-notes sequence only when it differs by value from
//! the previous one, so unrelated changes (e.g. switching quality while only
//! the fifth is selected) do not cause redundant notifications.

use crate::interval::{resolve_intervals, Degree, Quality};
use crate::note::{Letter, Note};

/// User interaction with the options panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    /// A root letter button was pressed.
    SelectLetter(Letter),
    /// The sharp modifier button was pressed.
    ToggleSharp,
    /// Major / minor was chosen.
    SetQuality(Quality),
    /// The 3 or 5 button was pressed.
    ToggleDegree(Degree),
}

/// Receives the selection's outward notifications.
pub trait SelectionObserver {
    /// The resolved root changed, including to no root.
    fn on_root_change(&mut self, root: Option<Note>);
    /// The visible-notes sequence changed value.
    fn on_visible_notes_change(&mut self, notes: &[Note]);
}

/// What changed as the result of one [`SelectionAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// `Some(new_root)` when the root changed.
    pub root: Option<Option<Note>>,
    /// `Some(new_notes)` when the visible notes changed value.
    pub visible_notes: Option<Vec<Note>>,
}

impl SelectionChange {
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.visible_notes.is_none()
    }
}

/// Selection state owned by one fretboard widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    root: Option<Note>,
    quality: Quality,
    degrees: Vec<Degree>,
    sharp: bool,
    visible_notes: Vec<Note>,
}

impl Selection {
    /// A fresh selection: no root, major, no degrees, sharp off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<Note> {
        self.root
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Selected degrees in the order they were selected.
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    pub fn has_degree(&self, degree: Degree) -> bool {
        self.degrees.contains(&degree)
    }

    pub fn is_sharp(&self) -> bool {
        self.sharp
    }

    pub fn visible_notes(&self) -> &[Note] {
        &self.visible_notes
    }

    /// Whether the root button for `letter` should show as active.
    pub fn is_letter_selected(&self, letter: Letter) -> bool {
        self.root.map(|root| root.letter()) == Some(letter)
    }

    /// Applies one action and reports what changed.
    pub fn apply(&mut self, action: SelectionAction) -> SelectionChange {
        let previous_root = self.root;
        let previous_notes = self.visible_notes.clone();

        match action {
            SelectionAction::SelectLetter(letter) => self.select_letter(letter),
            SelectionAction::ToggleSharp => self.toggle_sharp(),
            SelectionAction::SetQuality(quality) => {
                self.quality = quality;
                self.recompute();
            }
            SelectionAction::ToggleDegree(degree) => self.toggle_degree(degree),
        }

        let change = SelectionChange {
            root: (self.root != previous_root).then_some(self.root),
            visible_notes: (self.visible_notes != previous_notes)
                .then(|| self.visible_notes.clone()),
        };
        log::debug!("Selection {:?} -> {:?}", action, change);
        change
    }

    /// Applies one action and forwards the resulting changes to `observer`.
    pub fn dispatch<O: SelectionObserver + ?Sized>(
        &mut self,
        action: SelectionAction,
        observer: &mut O,
    ) -> SelectionChange {
        let change = self.apply(action);
        if let Some(root) = change.root {
            observer.on_root_change(root);
        }
        if let Some(notes) = &change.visible_notes {
            observer.on_visible_notes_change(notes);
        }
        change
    }

    fn select_letter(&mut self, letter: Letter) {
        if self.is_letter_selected(letter) {
            // Pressing the active letter again clears everything derived from it.
            self.root = None;
            self.degrees.clear();
            self.visible_notes.clear();
            return;
        }
        self.root = Some(letter.with_sharp(self.sharp));
        self.recompute();
    }

    fn toggle_sharp(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        let letter = root.letter();
        if letter.sharp().is_none() {
            return;
        }
        self.sharp = !self.sharp;
        self.root = Some(letter.with_sharp(!root.is_sharp()));
        self.recompute();
    }

    fn toggle_degree(&mut self, degree: Degree) {
        if let Some(pos) = self.degrees.iter().position(|&d| d == degree) {
            self.degrees.remove(pos);
        } else {
            self.degrees.push(degree);
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible_notes = resolve_intervals(self.root, self.quality, &self.degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        roots: Vec<Option<Note>>,
        notes: Vec<Vec<Note>>,
    }

    impl SelectionObserver for Recorder {
        fn on_root_change(&mut self, root: Option<Note>) {
            self.roots.push(root);
        }

        fn on_visible_notes_change(&mut self, notes: &[Note]) {
            self.notes.push(notes.to_vec());
        }
    }

    fn selection_with(actions: &[SelectionAction]) -> Selection {
        let mut selection = Selection::new();
        for &action in actions {
            selection.apply(action);
        }
        selection
    }

    #[test]
    fn starts_empty() {
        let selection = Selection::new();
        assert_eq!(selection.root(), None);
        assert_eq!(selection.quality(), Quality::Major);
        assert!(selection.degrees().is_empty());
        assert!(!selection.is_sharp());
        assert!(selection.visible_notes().is_empty());
    }

    #[test]
    fn selecting_root_then_degrees() {
        let selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleDegree(Degree::Third),
            SelectionAction::ToggleDegree(Degree::Fifth),
        ]);
        assert_eq!(selection.root(), Some(Note::C));
        assert_eq!(selection.visible_notes(), &[Note::E, Note::G]);
    }

    #[test]
    fn same_letter_twice_clears_root_and_notes() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::D),
            SelectionAction::ToggleDegree(Degree::Fifth),
        ]);
        assert_eq!(selection.visible_notes(), &[Note::A]);

        let change = selection.apply(SelectionAction::SelectLetter(Letter::D));
        assert_eq!(change.root, Some(None));
        assert_eq!(change.visible_notes, Some(vec![]));
        assert_eq!(selection.root(), None);
        assert!(selection.degrees().is_empty());
        assert!(selection.visible_notes().is_empty());
    }

    #[test]
    fn same_letter_clears_even_when_root_is_sharp() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleSharp,
        ]);
        assert_eq!(selection.root(), Some(Note::Cs));
        selection.apply(SelectionAction::SelectLetter(Letter::C));
        assert_eq!(selection.root(), None);
    }

    #[test]
    fn switching_letter_keeps_degrees() {
        let selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleDegree(Degree::Third),
            SelectionAction::SelectLetter(Letter::A),
        ]);
        assert_eq!(selection.root(), Some(Note::A));
        assert_eq!(selection.visible_notes(), &[Note::Cs]);
    }

    #[test]
    fn sharp_modifier_rederives_root() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::F),
            SelectionAction::ToggleDegree(Degree::Fifth),
        ]);
        selection.apply(SelectionAction::ToggleSharp);
        assert!(selection.is_sharp());
        assert_eq!(selection.root(), Some(Note::Fs));
        assert_eq!(selection.visible_notes(), &[Note::Cs]);

        selection.apply(SelectionAction::ToggleSharp);
        assert!(!selection.is_sharp());
        assert_eq!(selection.root(), Some(Note::F));
        assert_eq!(selection.visible_notes(), &[Note::C]);
    }

    #[test]
    fn sharp_modifier_is_noop_for_e_and_b() {
        for letter in [Letter::E, Letter::B] {
            let mut selection = selection_with(&[SelectionAction::SelectLetter(letter)]);
            let before = selection.clone();
            let change = selection.apply(SelectionAction::ToggleSharp);
            assert!(change.is_empty());
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn sharp_modifier_without_root_is_noop() {
        let mut selection = Selection::new();
        let change = selection.apply(SelectionAction::ToggleSharp);
        assert!(change.is_empty());
        assert!(!selection.is_sharp());

        selection.apply(SelectionAction::SelectLetter(Letter::G));
        assert_eq!(selection.root(), Some(Note::G));
    }

    #[test]
    fn sharp_modifier_survives_clearing_the_root() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleSharp,
            SelectionAction::SelectLetter(Letter::C),
        ]);
        assert_eq!(selection.root(), None);
        assert!(selection.is_sharp());

        selection.apply(SelectionAction::SelectLetter(Letter::G));
        assert_eq!(selection.root(), Some(Note::Gs));

        let natural_only = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleSharp,
            SelectionAction::SelectLetter(Letter::E),
        ]);
        assert_eq!(natural_only.root(), Some(Note::E));
        assert!(natural_only.is_sharp());
    }

    #[test]
    fn quality_change_recomputes_third() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleDegree(Degree::Third),
        ]);
        let change = selection.apply(SelectionAction::SetQuality(Quality::Minor));
        assert_eq!(change.visible_notes, Some(vec![Note::Ds]));
        assert_eq!(change.root, None);
    }

    #[test]
    fn degree_toggle_on_then_off_restores_notes() {
        let mut selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::G),
            SelectionAction::ToggleDegree(Degree::Fifth),
        ]);
        let before = selection.visible_notes().to_vec();
        selection.apply(SelectionAction::ToggleDegree(Degree::Third));
        assert_eq!(selection.visible_notes(), &[Note::D, Note::B]);
        selection.apply(SelectionAction::ToggleDegree(Degree::Third));
        assert_eq!(selection.visible_notes(), before.as_slice());
    }

    #[test]
    fn degrees_keep_selection_order() {
        let selection = selection_with(&[
            SelectionAction::SelectLetter(Letter::C),
            SelectionAction::ToggleDegree(Degree::Fifth),
            SelectionAction::ToggleDegree(Degree::Third),
        ]);
        assert_eq!(selection.degrees(), &[Degree::Fifth, Degree::Third]);
        assert_eq!(selection.visible_notes(), &[Note::G, Note::E]);
    }

    #[test]
    fn observer_sees_only_value_changes() {
        let mut selection = Selection::new();
        let mut recorder = Recorder::default();

        selection.dispatch(SelectionAction::SelectLetter(Letter::C), &mut recorder);
        assert_eq!(recorder.roots, vec![Some(Note::C)]);
        // No degrees yet, the visible notes stay empty.
        assert!(recorder.notes.is_empty());

        selection.dispatch(SelectionAction::ToggleDegree(Degree::Fifth), &mut recorder);
        assert_eq!(recorder.notes, vec![vec![Note::G]]);

        // The fifth is quality independent.
        selection.dispatch(SelectionAction::SetQuality(Quality::Minor), &mut recorder);
        assert_eq!(recorder.notes.len(), 1);
        assert_eq!(recorder.roots.len(), 1);

        selection.dispatch(SelectionAction::SelectLetter(Letter::C), &mut recorder);
        assert_eq!(recorder.roots, vec![Some(Note::C), None]);
        assert_eq!(recorder.notes, vec![vec![Note::G], vec![]]);
    }
}
