//! Combat balance configuration.
//!
//! Every number that shapes a fight (health pool, block reduction, flee odds,
//! status tick magnitudes) lives here so balance changes never touch the
//! resolution logic. Loaded from TOML by `fight-content`.

use crate::error::ConfigError;

/// Tunable combat parameters injected into every Fight Manager.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Maximum (and starting) health of a freshly created combatant.
    pub max_health: u32,

    /// Incoming damage is divided by this while the defender is blocking.
    pub block_divisor: u32,

    /// Flat damage absorbed while the `Shielded` status is active.
    pub shield_absorb: u32,

    /// Health lost per turn while `Poisoned`.
    pub poison_damage: u32,

    /// Health restored per turn while `Regenerating`.
    pub regeneration_heal: u32,

    /// Rule deciding whether a flee attempt succeeds.
    pub flee: FleePolicy,

    /// Base seed mixed into every random roll of an encounter.
    pub seed: u64,
}

impl CombatConfig {
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_BLOCK_DIVISOR: u32 = 2;
    pub const DEFAULT_SHIELD_ABSORB: u32 = 5;
    pub const DEFAULT_POISON_DAMAGE: u32 = 3;
    pub const DEFAULT_REGENERATION_HEAL: u32 = 3;
    pub const DEFAULT_FLEE_PERCENT: u32 = 50;

    /// Maximum number of simultaneous status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 8;
    /// Maximum number of distinct item stacks per combatant.
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            block_divisor: Self::DEFAULT_BLOCK_DIVISOR,
            shield_absorb: Self::DEFAULT_SHIELD_ABSORB,
            poison_damage: Self::DEFAULT_POISON_DAMAGE,
            regeneration_heal: Self::DEFAULT_REGENERATION_HEAL,
            flee: FleePolicy::Chance {
                percent: Self::DEFAULT_FLEE_PERCENT,
            },
            seed: 0,
        }
    }

    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    #[must_use]
    pub fn with_block_divisor(mut self, block_divisor: u32) -> Self {
        self.block_divisor = block_divisor;
        self
    }

    #[must_use]
    pub fn with_flee(mut self, flee: FleePolicy) -> Self {
        self.flee = flee;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the configuration for contract violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if self.block_divisor == 0 {
            return Err(ConfigError::ZeroBlockDivisor);
        }
        self.flee.validate()
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a flee attempt is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FleePolicy {
    /// Fleeing always works.
    Always,

    /// Fleeing never works.
    Never,

    /// Fixed success chance in percent.
    Chance { percent: u32 },

    /// Chance grows as the combatant gets hurt: `base_percent` plus
    /// `per_missing_tenth` for every full tenth of maximum health missing.
    Desperation {
        base_percent: u32,
        per_missing_tenth: u32,
    },
}

impl FleePolicy {
    /// Success chance in percent (0..=100) for a combatant at
    /// `current`/`maximum` health.
    pub fn chance(&self, current: u32, maximum: u32) -> u32 {
        match *self {
            FleePolicy::Always => 100,
            FleePolicy::Never => 0,
            FleePolicy::Chance { percent } => percent.min(100),
            FleePolicy::Desperation {
                base_percent,
                per_missing_tenth,
            } => {
                let missing = u64::from(maximum.saturating_sub(current));
                let tenths = (missing * 10)
                    .checked_div(u64::from(maximum))
                    .unwrap_or(0) as u32;
                base_percent
                    .saturating_add(tenths.saturating_mul(per_missing_tenth))
                    .min(100)
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            FleePolicy::Chance { percent } if percent > 100 => Err(ConfigError::InvalidPercent {
                field: "flee.percent",
                value: percent,
            }),
            FleePolicy::Desperation { base_percent, .. } if base_percent > 100 => {
                Err(ConfigError::InvalidPercent {
                    field: "flee.base_percent",
                    value: base_percent,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FleePolicy {
    fn default() -> Self {
        FleePolicy::Chance {
            percent: CombatConfig::DEFAULT_FLEE_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CombatConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_divisor_and_health() {
        assert_eq!(
            CombatConfig::new().with_block_divisor(0).validate(),
            Err(ConfigError::ZeroBlockDivisor)
        );
        assert_eq!(
            CombatConfig::new().with_max_health(0).validate(),
            Err(ConfigError::ZeroMaxHealth)
        );
    }

    #[test]
    fn rejects_out_of_range_flee_percent() {
        let config = CombatConfig::new().with_flee(FleePolicy::Chance { percent: 101 });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPercent { value: 101, .. })
        ));
    }

    #[test]
    fn desperation_grows_with_missing_health() {
        let policy = FleePolicy::Desperation {
            base_percent: 20,
            per_missing_tenth: 10,
        };
        assert_eq!(policy.chance(100, 100), 20);
        assert_eq!(policy.chance(50, 100), 70);
        assert_eq!(policy.chance(5, 100), 100);
    }
}
