// Material system module
//
// Orb identifiers, rarities and the starting material table, plus the
// (not yet used) item and affix data shapes.

pub mod affix;
pub mod definition;
pub mod table;

// Re-export main types for convenient access
pub use affix::Item;
pub use definition::{Material, OrbType, Rarity};
pub use table::MaterialTable;
