use std::collections::HashMap;

use thiserror::Error;

use super::definition::{Material, OrbType};

/// Starting inventory, baked into the binary
const BUILTIN_MATERIALS: &str = include_str!("../../assets/config/materials.json");

#[derive(Debug, Error)]
pub enum MaterialTableError {
    #[error("material table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("material {} is listed more than once", .0.id())]
    DuplicateOrb(OrbType),

    #[error("material {} is missing from the table", .0.id())]
    MissingOrb(OrbType),
}

impl From<MaterialTableError> for String {
    fn from(error: MaterialTableError) -> Self {
        error.to_string()
    }
}

/// The player's materials, keyed by orb
///
/// Every orb is present exactly once; lookups never miss after construction.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    materials: HashMap<OrbType, Material>,
}

impl MaterialTable {
    /// Decodes the table compiled into the binary
    pub fn builtin() -> Result<Self, MaterialTableError> {
        Self::from_json(BUILTIN_MATERIALS)
    }

    /// Decodes a JSON list of materials and checks every orb appears once
    pub fn from_json(json: &str) -> Result<Self, MaterialTableError> {
        let entries: Vec<Material> = serde_json::from_str(json)?;

        let mut materials = HashMap::with_capacity(entries.len());
        for material in entries {
            let orb = material.orb;
            if materials.insert(orb, material).is_some() {
                return Err(MaterialTableError::DuplicateOrb(orb));
            }
        }

        if let Some(orb) = OrbType::ALL.iter().find(|orb| !materials.contains_key(orb)) {
            return Err(MaterialTableError::MissingOrb(*orb));
        }

        Ok(MaterialTable { materials })
    }

    pub fn get(&self, orb: OrbType) -> Option<&Material> {
        self.materials.get(&orb)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Rarity;

    #[test]
    fn test_builtin_table_has_starting_amounts() {
        let table = MaterialTable::builtin().unwrap();
        assert_eq!(table.len(), 7);

        let expected = [
            (OrbType::Transmutation, 16),
            (OrbType::Augmentation, 12),
            (OrbType::Alchemy, 9),
            (OrbType::Regal, 4),
            (OrbType::Exalted, 111),
            (OrbType::Chaos, 3),
            (OrbType::Divine, 0),
        ];
        for (orb, amount) in expected {
            assert_eq!(table.get(orb).unwrap().amount, amount, "{}", orb.id());
        }
    }

    #[test]
    fn test_builtin_table_rarities() {
        let table = MaterialTable::builtin().unwrap();
        assert_eq!(table.get(OrbType::Transmutation).unwrap().rarity, Rarity::Magic);
        assert_eq!(table.get(OrbType::Augmentation).unwrap().rarity, Rarity::Magic);
        assert_eq!(table.get(OrbType::Exalted).unwrap().rarity, Rarity::Rare);
        assert_eq!(table.get(OrbType::Divine).unwrap().rarity, Rarity::Unique);
    }

    #[test]
    fn test_entries_are_tagged_with_their_own_key() {
        let table = MaterialTable::builtin().unwrap();
        for orb in OrbType::ALL {
            assert_eq!(table.get(orb).unwrap().orb, orb);
        }
    }

    #[test]
    fn test_duplicate_orb_is_rejected() {
        let json = r#"[
            {"name": "A", "type": "ORB_CHAOS", "description": "", "rarity": "Rare", "amount": 1},
            {"name": "B", "type": "ORB_CHAOS", "description": "", "rarity": "Rare", "amount": 2}
        ]"#;
        match MaterialTable::from_json(json) {
            Err(MaterialTableError::DuplicateOrb(orb)) => assert_eq!(orb, OrbType::Chaos),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_orb_is_rejected() {
        let json = r#"[
            {"name": "Chaos Orb", "type": "ORB_CHAOS", "description": "", "rarity": "Rare", "amount": 3}
        ]"#;
        let error = MaterialTable::from_json(json).unwrap_err();
        assert!(matches!(error, MaterialTableError::MissingOrb(_)));
        assert!(error.to_string().contains("missing"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let error = MaterialTable::from_json("{ not json").unwrap_err();
        assert!(matches!(error, MaterialTableError::Parse(_)));
    }
}
