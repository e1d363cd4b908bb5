//! Status effects carried by combatants.
//!
//! Effects store `expires_at: Turn` and stay active while
//! `current_turn < expires_at`. They are ticked and pruned by
//! [`FightManager::advance_turn`](crate::fight::FightManager::advance_turn).

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::state::Turn;

const _: () = assert!(
    CombatConfig::MAX_STATUS_EFFECTS >= <StatusKind as strum::EnumCount>::COUNT,
    "every status kind needs a slot"
);

/// Active status effects on a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with expiration turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub expires_at: Turn,
}

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    /// Loses health every turn.
    Poisoned,
    /// Recovers health every turn.
    Regenerating,
    /// Absorbs a flat amount of each incoming hit.
    Shielded,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if `kind` is active at the given turn.
    pub fn has(&self, kind: StatusKind, current: Turn) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == kind && e.expires_at > current)
    }

    /// Adds an effect, extending an existing one to the later expiry.
    ///
    /// Holds at most one entry per kind, so the list never runs out of room.
    pub fn add(&mut self, kind: StatusKind, expires_at: Turn) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.expires_at = existing.expires_at.max(expires_at);
            return;
        }
        let pushed = self.effects.try_push(StatusEffect { kind, expires_at });
        debug_assert!(pushed.is_ok(), "one slot per status kind");
    }

    /// Removes an effect immediately. Returns true if it was present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Drops every effect that has expired at `current`.
    pub fn remove_expired(&mut self, current: Turn) {
        self.effects.retain(|e| e.expires_at > current);
    }

    pub fn active_at(&self, current: Turn) -> impl Iterator<Item = &StatusEffect> + '_ {
        self.effects.iter().filter(move |e| e.expires_at > current)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_extends_to_later_expiry() {
        let mut effects = StatusEffects::empty();
        effects.add(StatusKind::Poisoned, Turn(3));
        effects.add(StatusKind::Poisoned, Turn(2));
        effects.add(StatusKind::Poisoned, Turn(5));
        assert_eq!(effects.iter().count(), 1);
        assert!(effects.has(StatusKind::Poisoned, Turn(4)));
        assert!(!effects.has(StatusKind::Poisoned, Turn(5)));
    }

    #[test]
    fn remove_expired_prunes() {
        let mut effects = StatusEffects::empty();
        effects.add(StatusKind::Shielded, Turn(1));
        effects.add(StatusKind::Regenerating, Turn(4));
        effects.remove_expired(Turn(2));
        assert!(!effects.has(StatusKind::Shielded, Turn(0)));
        assert!(effects.has(StatusKind::Regenerating, Turn(2)));
        assert!(effects.remove(StatusKind::Regenerating));
        assert!(effects.is_empty());
    }

    #[test]
    fn every_kind_fits_at_once() {
        use strum::EnumCount;

        let mut effects = StatusEffects::empty();
        for _ in 0..3 {
            effects.add(StatusKind::Poisoned, Turn(2));
            effects.add(StatusKind::Regenerating, Turn(2));
            effects.add(StatusKind::Shielded, Turn(2));
        }
        assert_eq!(effects.iter().count(), StatusKind::COUNT);
    }

    #[test]
    fn unbounded_duration_never_expires() {
        let mut effects = StatusEffects::empty();
        effects.add(StatusKind::Shielded, Turn(1) + u64::MAX);
        effects.remove_expired(Turn(u64::MAX - 1));
        assert!(effects.has(StatusKind::Shielded, Turn(u64::MAX - 1)));
    }
}
