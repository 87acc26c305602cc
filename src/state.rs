//! UI state as an immutable record. Every handler produces a new state
//! through [`AppState::reduce`] instead of mutating shared globals.

use crate::adjust::{adjust, Adjustments};
use crate::color::Color;
use crate::scheme::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub palette: Palette,
    pub selected: Option<usize>,
    pub adjustments: Adjustments,
}

/// Everything a user can do to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A fresh extraction result replaces the palette and clears the selection.
    LoadPalette(Palette),
    Select(usize),
    EditColor { index: usize, color: Color },
    Move { from: usize, to: usize },
    SetAdjustments(Adjustments),
    ResetAdjustments,
    /// Write the adjusted selection back into the palette and reset the sliders.
    CommitAdjustments,
    /// Load a palette from a share reference, falling back to the default.
    RestoreShared(String),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            selected: None,
            adjustments: Adjustments::IDENTITY,
        }
    }
}

impl AppState {
    pub fn reduce(self, action: Action) -> AppState {
        match action {
            Action::LoadPalette(palette) => AppState {
                palette,
                selected: None,
                adjustments: Adjustments::IDENTITY,
            },
            Action::Select(index) if index < self.palette.len() => AppState {
                selected: Some(index),
                adjustments: Adjustments::IDENTITY,
                ..self
            },
            Action::EditColor { index, color } => AppState {
                palette: self.palette.with_color(index, color),
                ..self
            },
            Action::Move { from, to } => {
                let selected = self.selected.map(|s| moved_index(s, from, to, self.palette.len()));
                AppState {
                    palette: self.palette.with_moved(from, to),
                    selected,
                    ..self
                }
            }
            Action::SetAdjustments(adjustments) => AppState {
                adjustments,
                ..self
            },
            Action::ResetAdjustments => AppState {
                adjustments: Adjustments::IDENTITY,
                ..self
            },
            Action::CommitAdjustments => match (self.selected, self.preview_color()) {
                (Some(index), Some(color)) => AppState {
                    palette: self.palette.with_color(index, color),
                    adjustments: Adjustments::IDENTITY,
                    ..self
                },
                _ => self,
            },
            Action::RestoreShared(reference) => AppState {
                palette: Palette::restore_or_default(&reference),
                selected: None,
                adjustments: Adjustments::IDENTITY,
            },
            Action::Select(_) => self,
        }
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected.and_then(|i| self.palette.get(i))
    }

    /// The selected color with the current slider values applied.
    pub fn preview_color(&self) -> Option<Color> {
        self.selected_color().map(|c| adjust(c, self.adjustments))
    }
}

/// Where the item at `index` ends up after moving `from` to `to`.
fn moved_index(index: usize, from: usize, to: usize, len: usize) -> usize {
    if from >= len || to >= len {
        index
    } else if index == from {
        to
    } else if from < index && index <= to {
        index - 1
    } else if to <= index && index < from {
        index + 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new(vec![
            Color::new(10, 10, 10),
            Color::new(20, 20, 20),
            Color::new(30, 30, 30),
        ])
    }

    fn loaded() -> AppState {
        AppState::default().reduce(Action::LoadPalette(palette()))
    }

    #[test]
    fn starts_with_default_palette() {
        let state = AppState::default();
        assert_eq!(state.palette, Palette::default());
        assert_eq!(state.selected, None);
        assert!(state.adjustments.is_identity());
    }

    #[test]
    fn select_in_and_out_of_range() {
        let state = loaded().reduce(Action::Select(1));
        assert_eq!(state.selected_color(), Some(Color::new(20, 20, 20)));
        let state = state.reduce(Action::Select(9));
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn preview_applies_adjustments_without_touching_palette() {
        let state = loaded()
            .reduce(Action::Select(0))
            .reduce(Action::SetAdjustments(Adjustments::new(30.0, 1.0, 0.0)));
        let preview = state.preview_color().unwrap();
        assert!(preview.relative_luminance() > Color::new(10, 10, 10).relative_luminance());
        assert_eq!(state.palette, palette());
    }

    #[test]
    fn commit_writes_back_and_resets_sliders() {
        let state = loaded()
            .reduce(Action::Select(2))
            .reduce(Action::SetAdjustments(Adjustments::new(20.0, 1.0, 0.0)));
        let preview = state.preview_color().unwrap();
        let state = state.reduce(Action::CommitAdjustments);
        assert_eq!(state.palette.get(2), Some(preview));
        assert!(state.adjustments.is_identity());
    }

    #[test]
    fn commit_without_selection_is_a_no_op() {
        let state = loaded().reduce(Action::SetAdjustments(Adjustments::new(20.0, 1.0, 0.0)));
        let after = state.clone().reduce(Action::CommitAdjustments);
        assert_eq!(after, state);
    }

    #[test]
    fn move_keeps_selection_on_the_same_color() {
        let state = loaded()
            .reduce(Action::Select(0))
            .reduce(Action::Move { from: 0, to: 2 });
        assert_eq!(state.selected, Some(2));
        assert_eq!(state.selected_color(), Some(Color::new(10, 10, 10)));

        let state = loaded()
            .reduce(Action::Select(1))
            .reduce(Action::Move { from: 2, to: 0 });
        assert_eq!(state.selected_color(), Some(Color::new(20, 20, 20)));
    }

    #[test]
    fn edit_color_replaces_one_entry() {
        let state = loaded().reduce(Action::EditColor {
            index: 1,
            color: Color::WHITE,
        });
        assert_eq!(state.palette.get(1), Some(Color::WHITE));
        assert_eq!(state.palette.len(), 3);
    }

    #[test]
    fn restore_shared_validates() {
        let shared = Palette::new(vec![Color::WHITE; 5]).to_share_string();
        let state = loaded().reduce(Action::RestoreShared(shared));
        assert_eq!(state.palette.colors(), &[Color::WHITE; 5]);

        let state = loaded().reduce(Action::RestoreShared("ffffff".into()));
        assert_eq!(state.palette, Palette::default());
    }

    #[test]
    fn reset_adjustments() {
        let state = loaded()
            .reduce(Action::SetAdjustments(Adjustments::new(5.0, 2.0, 10.0)))
            .reduce(Action::ResetAdjustments);
        assert!(state.adjustments.is_identity());
    }
}
