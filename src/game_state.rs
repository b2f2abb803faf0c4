//! Session state
//!
//! One `GameState` is built before the frame loop starts and passed by
//! reference to input handling and rendering. The selection is the only
//! field that changes while the game runs.

use log::debug;

use crate::gui::MaterialMenu;
use crate::input_system::InputAction;
use crate::material::table::MaterialTableError;
use crate::material::{Item, MaterialTable, OrbType};

/// The orb currently held under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Holding(OrbType),
}

pub struct GameState {
    pub materials: MaterialTable,
    #[allow(dead_code)] // Crafting target, not wired up yet
    pub item: Item,
    pub selection: Selection,
}

impl GameState {
    /// Starting state: built-in materials, a blank ring, nothing selected
    pub fn new() -> Result<Self, MaterialTableError> {
        Ok(GameState {
            materials: MaterialTable::builtin()?,
            item: Item::new("Ring"),
            selection: Selection::Empty,
        })
    }

    /// Applies one input action to the selection
    ///
    /// Right-click always picks up the Divine Orb, wherever the cursor is.
    /// Left-click drops whatever is held. `Quit` is handled by the frame loop.
    pub fn handle_action(&mut self, action: InputAction, menu: &MaterialMenu) {
        match action {
            InputAction::SelectOrb { x, y } => {
                debug!("Right click at ({}, {}), cell under cursor: {:?}", x, y, menu.orb_at(x, y));
                self.set_selection(Selection::Holding(OrbType::Divine));
            }
            InputAction::ClearSelection { .. } => {
                self.set_selection(Selection::Empty);
            }
            InputAction::Quit => {}
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            debug!("Selection: {:?} -> {:?}", self.selection, selection);
            self.selection = selection;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new().unwrap()
    }

    #[test]
    fn test_initial_selection_is_empty() {
        let state = new_state();
        assert_eq!(state.selection, Selection::Empty);
        assert_eq!(state.materials.len(), 7);
    }

    #[test]
    fn test_right_click_anywhere_selects_divine() {
        let menu = MaterialMenu::new();
        for (x, y) in [(0, 0), (60, 60), (799, 459), (-5, 1000)] {
            let mut state = new_state();
            state.handle_action(InputAction::SelectOrb { x, y }, &menu);
            assert_eq!(state.selection, Selection::Holding(OrbType::Divine));
        }
    }

    #[test]
    fn test_right_click_over_other_orb_still_selects_divine() {
        let menu = MaterialMenu::new();
        let mut state = new_state();

        // Centre of the Transmutation cell
        assert_eq!(menu.orb_at(77, 77), Some(OrbType::Transmutation));
        state.handle_action(InputAction::SelectOrb { x: 77, y: 77 }, &menu);
        assert_eq!(state.selection, Selection::Holding(OrbType::Divine));
    }

    #[test]
    fn test_right_then_left_click_clears() {
        let menu = MaterialMenu::new();
        let mut state = new_state();
        state.handle_action(InputAction::SelectOrb { x: 10, y: 10 }, &menu);
        state.handle_action(InputAction::ClearSelection { x: 10, y: 10 }, &menu);
        assert_eq!(state.selection, Selection::Empty);
    }

    #[test]
    fn test_left_click_without_selection_is_noop() {
        let menu = MaterialMenu::new();
        let mut state = new_state();
        state.handle_action(InputAction::ClearSelection { x: 300, y: 300 }, &menu);
        assert_eq!(state.selection, Selection::Empty);
    }

    #[test]
    fn test_repeated_right_clicks_are_idempotent() {
        let menu = MaterialMenu::new();
        let mut state = new_state();
        for _ in 0..3 {
            state.handle_action(InputAction::SelectOrb { x: 1, y: 2 }, &menu);
            assert_eq!(state.selection, Selection::Holding(OrbType::Divine));
        }
    }

    #[test]
    fn test_quit_leaves_selection_alone() {
        let menu = MaterialMenu::new();
        let mut state = new_state();
        state.handle_action(InputAction::SelectOrb { x: 1, y: 2 }, &menu);
        state.handle_action(InputAction::Quit, &menu);
        assert_eq!(state.selection, Selection::Holding(OrbType::Divine));
    }

    #[test]
    fn test_input_does_not_touch_materials() {
        let menu = MaterialMenu::new();
        let mut state = new_state();
        state.handle_action(InputAction::SelectOrb { x: 1, y: 2 }, &menu);
        state.handle_action(InputAction::ClearSelection { x: 1, y: 2 }, &menu);
        assert_eq!(state.materials.get(OrbType::Divine).unwrap().amount, 0);
        assert_eq!(state.materials.get(OrbType::Exalted).unwrap().amount, 111);
    }
}
