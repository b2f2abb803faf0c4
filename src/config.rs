//! Compile-time tunables for the window and the material menu.
//!
//! Nothing here is read at runtime; changing a value means rebuilding.

use sdl2::pixels::Color;

pub const WINDOW_TITLE: &str = "PoE2 Item Gambling";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 460;
pub const TARGET_FPS: u32 = 144;

/// Clear color for every frame (dark gray)
pub const BACKGROUND_COLOR: Color = Color::RGB(80, 80, 80);

// Material menu geometry (screen pixels)
pub const MATERIAL_MENU_OFFSET_X: i32 = 50;
pub const MATERIAL_MENU_OFFSET_Y: i32 = 50;
pub const MATERIAL_BOX_SIZE: u32 = 54;
pub const MATERIAL_IMAGE_SIZE: u32 = MATERIAL_BOX_SIZE - 4;
pub const MATERIAL_MENU_GAP: u32 = 4;

/// Bitmap font scale for the amount counter (2 = 10x14 glyphs)
pub const AMOUNT_TEXT_SCALE: u32 = 2;
/// Keeps the amount counter off the inset edges
pub const AMOUNT_TEXT_PADDING: i32 = 2;
