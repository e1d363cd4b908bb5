//! Item stacks carried into a fight.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::env::ItemId;

/// One stack of identical items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemId,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(item: ItemId, quantity: u16) -> Self {
        Self { item, quantity }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory has no free slot for item {0}")]
    Full(ItemId),
}

/// Bounded list of item stacks. Empty stacks are removed eagerly.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { CombatConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Adds `quantity` units of `item`, merging into an existing stack.
    pub fn add(&mut self, item: ItemId, quantity: u16) -> Result<(), InventoryError> {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.item == item) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return Ok(());
        }
        self.slots
            .try_push(InventorySlot::new(item, quantity))
            .map_err(|_| InventoryError::Full(item))
    }

    pub fn quantity(&self, item: ItemId) -> u16 {
        self.slots
            .iter()
            .find(|s| s.item == item)
            .map_or(0, |s| s.quantity)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.quantity(item) > 0
    }

    /// Removes one unit of `item`. Returns false if none is held.
    pub fn take_one(&mut self, item: ItemId) -> bool {
        let Some(index) = self.slots.iter().position(|s| s.item == item) else {
            return false;
        };
        let slot = &mut self.slots[index];
        slot.quantity = slot.quantity.saturating_sub(1);
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        true
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }
}
