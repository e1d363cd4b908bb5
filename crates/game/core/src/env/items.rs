//! Item-effect oracle.
//!
//! The core never decides what an item does; it asks an [`ItemOracle`] for
//! the definition and applies the returned [`ItemEffect`].

use std::fmt;

use crate::state::StatusKind;

/// Identifier of an item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

pub trait ItemOracle: Send + Sync {
    fn definition(&self, item: ItemId) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// What an item is called and what using it does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub effect: ItemEffect,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id,
            name: name.into(),
            effect,
        }
    }
}

/// Consumable effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restore health (clamped at maximum).
    Heal(u32),

    /// Remove a status effect.
    Cure(StatusKind),

    /// Grant a status effect for a number of turns.
    ApplyStatus { kind: StatusKind, turns: u64 },
}

/// In-memory item catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemTable {
    definitions: Vec<ItemDefinition>,
}

impl ItemTable {
    /// Builds a table; later definitions replace earlier ones with the same id.
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut table = Self::default();
        for definition in definitions {
            table.insert(definition);
        }
        table
    }

    pub fn insert(&mut self, definition: ItemDefinition) {
        match self.definitions.iter_mut().find(|d| d.id == definition.id) {
            Some(existing) => *existing = definition,
            None => self.definitions.push(definition),
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemTable {
    fn definition(&self, item: ItemId) -> Option<ItemDefinition> {
        self.definitions.iter().find(|d| d.id == item).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.definitions.clone()
    }
}
