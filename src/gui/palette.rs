use sdl2::pixels::Color;

use crate::material::Rarity;

pub const NORMAL_COLOR: Color = Color::RGB(255, 255, 255);
pub const MAGIC_COLOR: Color = Color::RGB(0, 121, 241);
pub const RARE_COLOR: Color = Color::RGB(253, 249, 0);
pub const UNIQUE_COLOR: Color = Color::RGB(255, 161, 0);
/// Used for any rarity without a color of its own
pub const FALLBACK_COLOR: Color = Color::RGB(130, 130, 130);

/// Display color for a rarity: white, blue, yellow, orange, else gray
pub fn color_for(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Normal => NORMAL_COLOR,
        Rarity::Magic => MAGIC_COLOR,
        Rarity::Rare => RARE_COLOR,
        Rarity::Unique => UNIQUE_COLOR,
        Rarity::Unknown => FALLBACK_COLOR,
    }
}
