//! Health pool with clamped arithmetic.

use crate::error::ConfigError;

/// Current and maximum health.
///
/// # Invariants
///
/// - `maximum > 0`
/// - `current <= maximum`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    current: u32,
    maximum: u32,
}

impl HealthMeter {
    /// Creates a full health pool.
    pub fn full(maximum: u32) -> Result<Self, ConfigError> {
        Self::new(maximum, maximum)
    }

    pub fn new(current: u32, maximum: u32) -> Result<Self, ConfigError> {
        if maximum == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if current > maximum {
            return Err(ConfigError::HealthAboveMaximum { current, maximum });
        }
        Ok(Self { current, maximum })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount` health, returning how much was actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }

    /// Restores up to `amount` health, returning how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.maximum - self.current);
        self.current += gained;
        gained
    }
}
