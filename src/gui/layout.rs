//! Grid geometry shared by menu rendering and hit-testing.

use sdl2::rect::Rect;

use crate::config::{MATERIAL_BOX_SIZE, MATERIAL_MENU_GAP, MATERIAL_MENU_OFFSET_X, MATERIAL_MENU_OFFSET_Y};
use crate::material::OrbType;

/// Pixel offset of the `index`-th element in a row or column of
/// `size`-pixel elements separated by `gap` pixels
pub fn grid_offset(size: u32, gap: u32, index: u32) -> i32 {
    (index * size + index * gap) as i32
}

/// One material box placed in the menu grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCell {
    pub row: u32,
    pub column: u32,
    pub orb: OrbType,
}

impl MenuCell {
    const fn new(row: u32, column: u32, orb: OrbType) -> Self {
        MenuCell { row, column, orb }
    }

    /// Screen-space rectangle of the whole box (border included)
    pub fn rect(&self) -> Rect {
        let x = MATERIAL_MENU_OFFSET_X + grid_offset(MATERIAL_BOX_SIZE, MATERIAL_MENU_GAP, self.column);
        let y = MATERIAL_MENU_OFFSET_Y + grid_offset(MATERIAL_BOX_SIZE, MATERIAL_MENU_GAP, self.row);
        Rect::new(x, y, MATERIAL_BOX_SIZE, MATERIAL_BOX_SIZE)
    }
}

/// Menu composition: basic orbs on the first row, rarer ones below
pub const MATERIAL_MENU_CELLS: [MenuCell; 7] = [
    MenuCell::new(0, 0, OrbType::Transmutation),
    MenuCell::new(0, 1, OrbType::Augmentation),
    MenuCell::new(0, 2, OrbType::Alchemy),
    MenuCell::new(0, 3, OrbType::Regal),
    MenuCell::new(1, 0, OrbType::Exalted),
    MenuCell::new(1, 1, OrbType::Chaos),
    MenuCell::new(1, 2, OrbType::Divine),
];
