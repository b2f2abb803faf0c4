use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::layout::{MenuCell, MATERIAL_MENU_CELLS};
use super::material_box::render_material_box;
use crate::assets::TextureAtlas;
use crate::material::{MaterialTable, OrbType};

/// The fixed grid of material boxes in the top-left of the screen
///
/// Drawing and hit-testing both read the same cell table, so what is drawn
/// and what is clickable cannot drift apart.
pub struct MaterialMenu {
    cells: &'static [MenuCell],
}

impl MaterialMenu {
    pub fn new() -> Self {
        MaterialMenu {
            cells: &MATERIAL_MENU_CELLS,
        }
    }

    pub fn cells(&self) -> &[MenuCell] {
        self.cells
    }

    /// The orb whose box contains (x, y), if any
    pub fn orb_at(&self, x: i32, y: i32) -> Option<OrbType> {
        let point = Point::new(x, y);
        self.cells
            .iter()
            .find(|cell| cell.rect().contains_point(point))
            .map(|cell| cell.orb)
    }

    /// Draws every cell with its icon and current amount
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        atlas: &mut TextureAtlas,
        materials: &MaterialTable,
    ) -> Result<(), String> {
        for cell in self.cells {
            let material = materials
                .get(cell.orb)
                .ok_or_else(|| format!("No material entry for {}", cell.orb.id()))?;
            let (icon, radial) = atlas
                .icon_with_radial(cell.orb)
                .ok_or_else(|| format!("No texture loaded for {}", cell.orb.id()))?;

            let rect = cell.rect();
            render_material_box(canvas, rect.x(), rect.y(), icon, radial, material)?;
        }

        Ok(())
    }
}

impl Default for MaterialMenu {
    fn default() -> Self {
        Self::new()
    }
}
