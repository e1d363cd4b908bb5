//! Item catalog loader.

use std::path::Path;

use fight_core::{ItemDefinition, ItemTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn load(path: &Path) -> LoadResult<ItemTable> {
        let content = read_file(path)?;
        let table = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), items = table.len(), "loaded item catalog");
        Ok(table)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemTable> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(ItemTable::new(catalog.items))
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> LoadResult<ItemTable> {
        Self::parse(include_str!("../../data/items.ron"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fight_core::{ItemEffect, ItemId, ItemOracle, StatusKind};

    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let table = ItemLoader::builtin().unwrap();
        assert!(!table.is_empty());

        let potion = table.definition(ItemId(1)).unwrap();
        assert_eq!(potion.effect, ItemEffect::Heal(30));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                items: [
                    (id: (7), name: "Smelling Salts", effect: Cure(Poisoned)),
                    (id: (8), name: "Tower Shield", effect: ApplyStatus(kind: Shielded, turns: 2)),
                ],
            )"#
        )
        .unwrap();

        let table = ItemLoader::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.definition(ItemId(8)).unwrap().effect,
            ItemEffect::ApplyStatus {
                kind: StatusKind::Shielded,
                turns: 2
            }
        );
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = ItemLoader::parse("(items: [(id: 1)])").unwrap_err();
        assert!(err.to_string().contains("Failed to parse item catalog RON"));
    }
}
