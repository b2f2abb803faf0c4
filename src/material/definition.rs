use serde::{Deserialize, Serialize};

/// The seven crafting orbs known to the game
///
/// Serialized as the fixed string keys used throughout the material table
/// (e.g. `"ORB_DIVINE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbType {
    #[serde(rename = "ORB_TRANS")]
    Transmutation,
    #[serde(rename = "ORB_AUG")]
    Augmentation,
    #[serde(rename = "ORB_ALCH")]
    Alchemy,
    #[serde(rename = "ORB_REGAL")]
    Regal,
    #[serde(rename = "ORB_EXALT")]
    Exalted,
    #[serde(rename = "ORB_CHAOS")]
    Chaos,
    #[serde(rename = "ORB_DIVINE")]
    Divine,
}

impl OrbType {
    pub const ALL: [OrbType; 7] = [
        OrbType::Transmutation,
        OrbType::Augmentation,
        OrbType::Alchemy,
        OrbType::Regal,
        OrbType::Exalted,
        OrbType::Chaos,
        OrbType::Divine,
    ];

    /// Stable string key for this orb
    pub fn id(&self) -> &'static str {
        match self {
            OrbType::Transmutation => "ORB_TRANS",
            OrbType::Augmentation => "ORB_AUG",
            OrbType::Alchemy => "ORB_ALCH",
            OrbType::Regal => "ORB_REGAL",
            OrbType::Exalted => "ORB_EXALT",
            OrbType::Chaos => "ORB_CHAOS",
            OrbType::Divine => "ORB_DIVINE",
        }
    }

    /// Relative path of the icon image that must exist at startup
    pub fn icon_path(&self) -> &'static str {
        match self {
            OrbType::Transmutation => "assets/transmutation-orb.png",
            OrbType::Augmentation => "assets/augmentation-orb.png",
            OrbType::Alchemy => "assets/alchemy-orb.png",
            OrbType::Regal => "assets/regal-orb.png",
            OrbType::Exalted => "assets/exalted-orb.png",
            OrbType::Chaos => "assets/chaos-orb.png",
            OrbType::Divine => "assets/divine-orb.png",
        }
    }
}

/// Display rank of a material
///
/// Only drives the color of the material box for now. Any rank name the
/// table doesn't recognise decodes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    #[serde(other)]
    Unknown,
}

/// A craftable orb the player owns some amount of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name shown in UI
    pub name: String,

    /// Which orb this is (also the table key)
    #[serde(rename = "type")]
    pub orb: OrbType,

    /// What the orb does to an item once crafting exists
    pub description: String,

    pub rarity: Rarity,

    /// How many the player owns (may be zero)
    pub amount: u32,
}

impl Material {
    /// Amount as plain decimal text, no grouping or padding
    pub fn amount_text(&self) -> String {
        self.amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_with_amount(amount: u32) -> Material {
        Material {
            name: "Divine Orb".to_string(),
            orb: OrbType::Divine,
            description: String::new(),
            rarity: Rarity::Unique,
            amount,
        }
    }

    #[test]
    fn test_amount_text_is_plain_decimal() {
        assert_eq!(material_with_amount(0).amount_text(), "0");
        assert_eq!(material_with_amount(111).amount_text(), "111");
        assert_eq!(material_with_amount(12000).amount_text(), "12000");
    }

    #[test]
    fn test_orb_ids_match_serde_names() {
        for orb in OrbType::ALL {
            let json = serde_json::to_string(&orb).unwrap();
            assert_eq!(json, format!("\"{}\"", orb.id()));
        }
    }

    #[test]
    fn test_icon_paths_live_under_assets() {
        for orb in OrbType::ALL {
            assert!(orb.icon_path().starts_with("assets/"));
            assert!(orb.icon_path().ends_with(".png"));
        }
    }

    #[test]
    fn test_unrecognised_rarity_decodes_to_unknown() {
        let rarity: Rarity = serde_json::from_str("\"Legendary\"").unwrap();
        assert_eq!(rarity, Rarity::Unknown);

        let rarity: Rarity = serde_json::from_str("\"Magic\"").unwrap();
        assert_eq!(rarity, Rarity::Magic);
    }
}
