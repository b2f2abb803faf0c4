//! Screen-Space GUI
//!
//! Everything drawn on screen lives here. Components render at fixed screen
//! positions using SDL2 primitives plus the textures in `TextureAtlas`.
//!
//! # Available Components
//!
//! - [`MaterialMenu`] - Grid of material boxes with owned amounts
//! - [`material_box::render_material_box`] - A single material box
//! - [`render_selection_under_cursor`] - Held orb following the cursor
//!
//! Layout math ([`layout`]) and rarity colors ([`palette`]) are pure and
//! shared between rendering and hit-testing.

pub mod layout;
pub mod material_box;
pub mod material_menu;
pub mod palette;
pub mod selection_overlay;

pub use material_menu::MaterialMenu;
pub use selection_overlay::render_selection_under_cursor;
