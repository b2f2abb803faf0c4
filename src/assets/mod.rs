// Asset loading module
//
// Icons are decoded and resized into surfaces before a window exists, then
// uploaded into a `TextureAtlas` once the canvas is up.

pub mod atlas;
pub mod gradient;
pub mod loader;

pub use atlas::TextureAtlas;
pub use loader::{load_material_icons, AssetError};
