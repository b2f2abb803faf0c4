//! Material Box
//!
//! One cell of the material menu: a rarity-colored frame, a black inset with
//! a rarity-tinted radial glow, the orb icon, and the owned amount in the
//! bottom-right corner. Purely decorative; boxes have no hover or focus state.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use super::palette::color_for;
use crate::config::{AMOUNT_TEXT_PADDING, AMOUNT_TEXT_SCALE, MATERIAL_BOX_SIZE, MATERIAL_IMAGE_SIZE};
use crate::material::Material;
use crate::text::{draw_text, measure_text, text_height};

/// Rectangles making up a box drawn at a given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialBoxLayout {
    /// Full box, painted in the rarity color (doubles as the border)
    pub frame: Rect,
    /// Icon area centred inside the frame
    pub inset: Rect,
}

impl MaterialBoxLayout {
    pub fn at(x: i32, y: i32) -> Self {
        let image_offset = ((MATERIAL_BOX_SIZE - MATERIAL_IMAGE_SIZE) / 2) as i32;
        MaterialBoxLayout {
            frame: Rect::new(x, y, MATERIAL_BOX_SIZE, MATERIAL_BOX_SIZE),
            inset: Rect::new(
                x + image_offset,
                y + image_offset,
                MATERIAL_IMAGE_SIZE,
                MATERIAL_IMAGE_SIZE,
            ),
        }
    }

    /// Top-left corner for `text` so it sits in the inset's bottom-right
    /// corner, `AMOUNT_TEXT_PADDING` pixels from both edges
    pub fn amount_position(&self, text: &str) -> (i32, i32) {
        let width = measure_text(text, AMOUNT_TEXT_SCALE) as i32;
        let height = text_height(AMOUNT_TEXT_SCALE) as i32;
        (
            self.inset.right() - width - AMOUNT_TEXT_PADDING,
            self.inset.bottom() - height - AMOUNT_TEXT_PADDING,
        )
    }
}

/// Draws one material box with its top-left corner at (x, y)
pub fn render_material_box(
    canvas: &mut Canvas<Window>,
    x: i32,
    y: i32,
    icon: &Texture,
    radial: &mut Texture,
    material: &Material,
) -> Result<(), String> {
    let layout = MaterialBoxLayout::at(x, y);
    let rarity_color = color_for(material.rarity);

    // Frame
    canvas.set_draw_color(rarity_color);
    canvas.fill_rect(layout.frame)?;

    // Inset background
    canvas.set_draw_color(Color::BLACK);
    canvas.fill_rect(layout.inset)?;

    // Rarity glow behind the icon
    radial.set_color_mod(rarity_color.r, rarity_color.g, rarity_color.b);
    canvas.copy(radial, None, layout.inset)?;

    canvas.copy(icon, None, layout.inset)?;

    let amount = material.amount_text();
    let (text_x, text_y) = layout.amount_position(&amount);
    draw_text(canvas, &amount, text_x, text_y, Color::WHITE, AMOUNT_TEXT_SCALE)?;

    Ok(())
}
